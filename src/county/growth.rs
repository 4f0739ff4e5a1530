// src/county/growth.rs
use std::collections::{HashMap, HashSet};

use crate::cell::Cell;
use crate::config::CountySettings;
use crate::county::{County, weighted_center};

/// Вес смежности с уже принятыми клетками в оценке кандидата.
/// Доминирует над населением в типичных диапазонах: дешёвые клетки не дают
/// перескочить цель по населению, а тяга к собственной границе держит форму
/// компактной вместо "щупалец" через всю карту.
const MEMBER_ADJACENCY_WEIGHT: f32 = 100.0;

/// Растит графство жадной заливкой от клетки-зерна.
///
/// Зерно принимается сразу; дальше на каждом шаге из границы выбирается
/// кандидат с максимальной оценкой `-население + 100 × смежных членов`,
/// пока не достигнута цель по населению, предел по клеткам или граница
/// не исчерпана. Помечает принятые клетки через `county_id`.
pub fn grow_county(
    cells: &mut [Cell],
    index_of: &HashMap<u32, usize>,
    seed_idx: usize,
    province_constraint: u32,
    county_id: u32,
    settings: &CountySettings,
) -> County {
    cells[seed_idx].county_id = county_id;
    let mut county = County::seeded_at(county_id, &cells[seed_idx]);

    // Граница: соседи зерна без дубликатов, в порядке первого появления
    let mut frontier: Vec<u32> = Vec::new();
    let mut queued: HashSet<u32> = HashSet::new();
    for &nid in &cells[seed_idx].neighbor_ids {
        if queued.insert(nid) {
            frontier.push(nid);
        }
    }

    while county.total_population < settings.target_population
        && county.cell_ids.len() < settings.max_cells_per_county
        && !frontier.is_empty()
    {
        let mut best: Option<(usize, f32)> = None;
        for (pos, nid) in frontier.iter().enumerate() {
            let Some(&idx) = index_of.get(nid) else {
                continue; // висячий ID смежности
            };
            let candidate = &cells[idx];
            if !candidate.is_land || candidate.county_id != 0 {
                continue;
            }
            if province_constraint > 0 && candidate.province_id != province_constraint {
                continue;
            }

            let touching = candidate
                .neighbor_ids
                .iter()
                .filter(|&&n| {
                    index_of
                        .get(&n)
                        .is_some_and(|&j| cells[j].county_id == county_id)
                })
                .count();
            let score = -candidate.population + MEMBER_ADJACENCY_WEIGHT * touching as f32;

            // Строгое сравнение: при равных оценках побеждает более ранний в границе
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        // Валидных кандидатов не осталось — рост завершён на текущем размере
        let Some((pos, _)) = best else { break };

        let picked_id = frontier.remove(pos);
        let picked_idx = index_of[&picked_id];
        cells[picked_idx].county_id = county_id;
        county.cell_ids.push(picked_id);
        county.total_population += cells[picked_idx].population;

        // Соседи новичка пополняют границу, если ещё не назначены и не в очереди
        for &nid in &cells[picked_idx].neighbor_ids {
            let unassigned = index_of.get(&nid).map_or(true, |&j| cells[j].county_id == 0);
            if unassigned && queued.insert(nid) {
                frontier.push(nid);
            }
        }
    }

    let members: Vec<((f32, f32), f32)> = county
        .cell_ids
        .iter()
        .filter_map(|cid| index_of.get(cid))
        .map(|&idx| (cells[idx].center, cells[idx].population))
        .collect();
    county.center = weighted_center(&members);

    county
}
