//! Инварианты разбиения на графства: полнота, непересекаемость,
//! сохранение населения, пределы размера и детерминизм — на демо-сетке
//! и на ручных графах.

mod support;

use std::collections::HashSet;

use countygen::config::{CountySettings, DemoSettings};
use countygen::county::weighted_center;
use countygen::demo::generate_demo_cells;
use countygen::{Cell, partition_counties};
use support::{land, land_in_province, water, with_burg};

fn demo_settings() -> DemoSettings {
    DemoSettings {
        width: 96,
        height: 48,
        land_ratio: 0.35,
        num_provinces: 10,
        num_burgs: 30,
    }
}

#[test]
fn every_land_cell_gets_a_county() {
    for seed in [1, 42, 7777] {
        let mut cells = generate_demo_cells(seed, &demo_settings());
        partition_counties(&mut cells, &CountySettings::default());

        for cell in &cells {
            if cell.is_land {
                assert!(cell.county_id > 0, "land cell {} unassigned", cell.id);
            } else {
                assert_eq!(cell.county_id, 0, "water cell {} assigned", cell.id);
            }
        }
    }
}

#[test]
fn counties_cover_land_exactly_once() {
    let mut cells = generate_demo_cells(42, &demo_settings());
    let counties = partition_counties(&mut cells, &CountySettings::default());

    let land_ids: HashSet<u32> = cells.iter().filter(|c| c.is_land).map(|c| c.id).collect();

    let mut seen = HashSet::new();
    let mut member_total = 0;
    for county in &counties {
        assert!(!county.cell_ids.is_empty(), "county {} is empty", county.id);
        member_total += county.cell_ids.len();
        for cid in &county.cell_ids {
            assert!(
                seen.insert(*cid),
                "cell {cid} belongs to more than one county"
            );
        }
    }

    assert_eq!(member_total, land_ids.len(), "membership count != land count");
    assert_eq!(seen, land_ids, "union of counties != land set");
}

#[test]
fn population_is_conserved() {
    let mut cells = generate_demo_cells(7, &demo_settings());
    let counties = partition_counties(&mut cells, &CountySettings::default());

    let by_id: std::collections::HashMap<u32, &Cell> = cells.iter().map(|c| (c.id, c)).collect();

    let mut counties_total = 0.0f64;
    for county in &counties {
        let member_sum: f32 = county.cell_ids.iter().map(|cid| by_id[cid].population).sum();
        assert!(
            (member_sum - county.total_population).abs() < 1e-2,
            "county {}: members sum to {member_sum}, recorded {}",
            county.id,
            county.total_population
        );
        counties_total += f64::from(county.total_population);
    }

    let land_total: f64 = cells
        .iter()
        .filter(|c| c.is_land)
        .map(|c| f64::from(c.population))
        .sum();
    let diff = (counties_total - land_total).abs();
    assert!(
        diff <= land_total.max(1.0) * 1e-3,
        "population not conserved: counties {counties_total}, land {land_total}"
    );
}

#[test]
fn county_size_respects_cap() {
    let settings = CountySettings {
        max_cells_per_county: 8,
        ..CountySettings::default()
    };
    let mut cells = generate_demo_cells(42, &demo_settings());
    let counties = partition_counties(&mut cells, &settings);

    for county in &counties {
        assert!(
            county.cell_ids.len() <= 8,
            "county {} has {} cells",
            county.id,
            county.cell_ids.len()
        );
    }
}

#[test]
fn dense_cells_are_promoted_to_singletons() {
    let mut cells = generate_demo_cells(42, &demo_settings());
    let counties = partition_counties(&mut cells, &CountySettings::default());

    for cell in cells.iter().filter(|c| c.is_land && c.population >= 500.0) {
        let county = &counties[(cell.county_id - 1) as usize];
        assert_eq!(
            county.cell_ids,
            vec![cell.id],
            "dense cell {} shares county {} with others",
            cell.id,
            county.id
        );
        assert_eq!(county.seat_cell_id, cell.id);
    }
}

#[test]
fn identical_inputs_give_identical_counties() {
    let settings = CountySettings::default();

    let mut first = generate_demo_cells(2026, &demo_settings());
    let mut second = generate_demo_cells(2026, &demo_settings());
    let counties_a = partition_counties(&mut first, &settings);
    let counties_b = partition_counties(&mut second, &settings);

    let json_a = serde_json::to_string(&counties_a).unwrap();
    let json_b = serde_json::to_string(&counties_b).unwrap();
    assert_eq!(json_a, json_b, "county lists diverged between runs");

    let assignments_a: Vec<u32> = first.iter().map(|c| c.county_id).collect();
    let assignments_b: Vec<u32> = second.iter().map(|c| c.county_id).collect();
    assert_eq!(assignments_a, assignments_b, "cell assignments diverged");
}

#[test]
fn county_records_are_internally_consistent() {
    let mut cells = generate_demo_cells(11, &demo_settings());
    let counties = partition_counties(&mut cells, &CountySettings::default());

    let by_id: std::collections::HashMap<u32, &Cell> = cells.iter().map(|c| (c.id, c)).collect();

    for (i, county) in counties.iter().enumerate() {
        // Сквозная нумерация с единицы в порядке списка
        assert_eq!(county.id, i as u32 + 1);
        // Резиденция — первый принятый член (зерно)
        assert_eq!(county.cell_ids[0], county.seat_cell_id);

        for cid in &county.cell_ids {
            let cell = by_id[cid];
            assert_eq!(cell.county_id, county.id);
            if county.province_id > 0 {
                assert_eq!(
                    cell.province_id, county.province_id,
                    "cell {cid} crossed the province border into county {}",
                    county.id
                );
            }
        }

        let members: Vec<((f32, f32), f32)> = county
            .cell_ids
            .iter()
            .map(|cid| (by_id[cid].center, by_id[cid].population))
            .collect();
        let (cx, cy) = weighted_center(&members);
        assert!(
            (cx - county.center.0).abs() < 1e-3 && (cy - county.center.1).abs() < 1e-3,
            "county {} centroid drifted: ({cx}, {cy}) vs {:?}",
            county.id,
            county.center
        );
    }
}

// === Ручные сценарии ===

#[test]
fn dense_singleton_then_orphan_sweep() {
    let mut cells = vec![
        land_in_province(1, 1, 600.0, &[]),
        land_in_province(2, 1, 50.0, &[1, 3]),
        land_in_province(3, 1, 30.0, &[2]),
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties.len(), 2);

    assert_eq!(counties[0].cell_ids, vec![1], "dense cell stands alone");
    assert_eq!(counties[0].name, "County 1");

    // Сироты сметаются одним графством от более населённой клетки 2
    assert_eq!(counties[1].seat_cell_id, 2);
    assert_eq!(counties[1].cell_ids, vec![2, 3]);
    assert!((counties[1].total_population - 80.0).abs() < 1e-4);
}

#[test]
fn growth_stops_once_population_target_is_met() {
    // Зерно 50 + десять соседей по 20: цель 200 достигается после восьми
    let mut cells = vec![land(100, 50.0, &(1..=10).collect::<Vec<u32>>())];
    for id in 1..=10 {
        cells.push(land(id, 20.0, &[100]));
    }

    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties[0].seat_cell_id, 100);
    assert_eq!(counties[0].cell_ids.len(), 9, "50 + 8×20 = 210 >= 200");
    assert!((counties[0].total_population - 210.0).abs() < 1e-4);
    assert_eq!(counties[0].cell_ids, vec![100, 1, 2, 3, 4, 5, 6, 7, 8]);

    // Непоглощённые соседи выметаются отдельными графствами
    assert_eq!(counties.len(), 3);
    assert_eq!(counties[1].cell_ids, vec![9]);
    assert_eq!(counties[2].cell_ids, vec![10]);
}

#[test]
fn province_border_fences_the_seed_in() {
    let mut cells = vec![
        land_in_province(1, 1, 100.0, &[2, 3]),
        land_in_province(2, 2, 10.0, &[1, 3]),
        land_in_province(3, 2, 10.0, &[1, 2]),
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties.len(), 2);
    assert_eq!(
        counties[0].cell_ids,
        vec![1],
        "no neighbor passes the province filter"
    );
    assert_eq!(counties[1].cell_ids, vec![2, 3]);
}

#[test]
fn global_bucket_grows_across_province_borders() {
    // Провинция 0 — общая корзина: её рост не знает границ провинций
    let mut cells = vec![
        land_in_province(1, 0, 100.0, &[2]),
        land_in_province(2, 3, 10.0, &[1]),
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties.len(), 1);
    assert_eq!(counties[0].cell_ids, vec![1, 2]);
}

#[test]
fn burg_seeds_outrank_richer_plain_cells() {
    let mut cells = vec![
        with_burg(land(1, 100.0, &[2]), "Ostfurt"),
        land(2, 300.0, &[1]),
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    // Бург сеет первым и поглощает более населённого соседа
    assert_eq!(counties.len(), 1);
    assert_eq!(counties[0].name, "Ostfurt");
    assert_eq!(counties[0].seat_cell_id, 1);
    assert_eq!(counties[0].cell_ids, vec![1, 2]);
}

#[test]
fn absorbed_burg_does_not_seed_twice() {
    // Богатый бург поглощает бедный; второй не должен породить графство
    let mut cells = vec![
        with_burg(land(1, 150.0, &[2]), "Hauptburg"),
        with_burg(land(2, 60.0, &[1]), "Kleindorf"),
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties.len(), 1);
    assert_eq!(counties[0].name, "Hauptburg");
    assert_eq!(counties[0].cell_ids, vec![1, 2]);
}

#[test]
fn empty_and_all_water_graphs_yield_nothing() {
    let counties = partition_counties(&mut [], &CountySettings::default());
    assert!(counties.is_empty());

    let mut cells = vec![water(1, &[2]), water(2, &[1])];
    let counties = partition_counties(&mut cells, &CountySettings::default());
    assert!(counties.is_empty());
    assert!(cells.iter().all(|c| c.county_id == 0));
}

#[test]
fn isolated_cells_become_singleton_counties() {
    let mut cells = vec![
        land(1, 10.0, &[]),
        land(2, 10.0, &[]),
        land(3, 10.0, &[999]), // висячая смежность — не ошибка
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties.len(), 3);
    for (county, expect) in counties.iter().zip([1u32, 2, 3]) {
        assert_eq!(county.cell_ids, vec![expect]);
        assert_eq!(county.name, format!("County {}", county.id));
    }
}

#[test]
fn water_neighbors_are_never_absorbed() {
    let mut cells = vec![
        land(1, 50.0, &[2, 3]),
        water(2, &[1]),
        land(3, 20.0, &[1]),
    ];
    let counties = partition_counties(&mut cells, &CountySettings::default());

    assert_eq!(counties.len(), 1);
    assert_eq!(counties[0].cell_ids, vec![1, 3]);
    assert_eq!(cells[1].county_id, 0);
}
