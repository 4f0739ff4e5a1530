// src/county/partition.rs
//! Разбиение провинций на графства
//!
//! Каждая провинция нарезается независимо, в три фазы:
//! 1. Очень плотные клетки сразу становятся одноклеточными графствами.
//! 2. Клетки с бургами растут в многоклеточные графства жадной заливкой.
//! 3. Оставшиеся "сироты" подбираются: самая населённая свободная клетка
//!    становится новым зерном, пока свободных клеток не останется.
//!
//! После прогона каждая сухопутная клетка принадлежит ровно одному графству.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::cell::Cell;
use crate::config::CountySettings;
use crate::county::County;
use crate::county::growth::grow_county;

/// Нарезает все сухопутные клетки на графства, проставляя `county_id`.
///
/// Номера графств сквозные, начиная с 1, в порядке создания; провинции
/// обрабатываются по возрастанию ID, провинция 0 — общая корзина клеток
/// вне провинций (рост в ней не ограничен границей провинции).
pub fn partition_counties(cells: &mut [Cell], settings: &CountySettings) -> Vec<County> {
    let index_of: HashMap<u32, usize> = cells.iter().enumerate().map(|(i, c)| (c.id, i)).collect();

    // Корзины: провинция -> индексы сухопутных клеток, в порядке обхода среза
    let mut buckets: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (i, cell) in cells.iter().enumerate() {
        if cell.is_land {
            buckets.entry(cell.province_id).or_default().push(i);
        }
    }

    let mut counties: Vec<County> = Vec::new();

    for (&province_id, bucket) in &buckets {
        // Фаза 1: плотность сама по себе даёт автономию, без роста
        let mut dense: Vec<usize> = bucket
            .iter()
            .copied()
            .filter(|&i| cells[i].population >= settings.high_density_threshold)
            .collect();
        dense.sort_by(|&a, &b| by_population_desc(&cells[a], &cells[b]));

        for idx in dense {
            let id = counties.len() as u32 + 1;
            cells[idx].county_id = id;
            counties.push(County::seeded_at(id, &cells[idx]));
        }

        // Фаза 2: бурги растут в графства, в порядке убывания населения
        let mut burg_seeds: Vec<usize> = bucket
            .iter()
            .copied()
            .filter(|&i| cells[i].county_id == 0 && cells[i].burg.is_some())
            .collect();
        burg_seeds.sort_by(|&a, &b| by_population_desc(&cells[a], &cells[b]));

        for idx in burg_seeds {
            // Бург мог быть поглощён ростом более населённого соседа
            if cells[idx].county_id != 0 {
                continue;
            }
            let id = counties.len() as u32 + 1;
            counties.push(grow_county(cells, &index_of, idx, province_id, id, settings));
        }

        // Фаза 3: подбор сирот — самая населённая свободная клетка становится зерном
        loop {
            let next_seed = bucket
                .iter()
                .copied()
                .filter(|&i| cells[i].county_id == 0)
                .min_by(|&a, &b| by_population_desc(&cells[a], &cells[b]));
            let Some(idx) = next_seed else { break };

            let id = counties.len() as u32 + 1;
            counties.push(grow_county(cells, &index_of, idx, province_id, id, settings));
        }
    }

    debug_assert!(
        cells.iter().all(|c| !c.is_land || c.county_id > 0),
        "land cell left without a county"
    );

    counties
}

/// Убывание населения, при равенстве — возрастание ID клетки.
fn by_population_desc(a: &Cell, b: &Cell) -> Ordering {
    b.population
        .partial_cmp(&a.population)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}
