//! Ручные графы клеток для тестов разбиения.
#![allow(dead_code)]

use countygen::{Burg, Cell};

pub fn land(id: u32, population: f32, neighbors: &[u32]) -> Cell {
    Cell::land(id, (id as f32, 0.0), population, neighbors.to_vec())
}

pub fn land_in_province(id: u32, province_id: u32, population: f32, neighbors: &[u32]) -> Cell {
    let mut cell = land(id, population, neighbors);
    cell.province_id = province_id;
    cell
}

pub fn water(id: u32, neighbors: &[u32]) -> Cell {
    Cell::water(id, (id as f32, 0.0), neighbors.to_vec())
}

pub fn with_burg(mut cell: Cell, name: &str) -> Cell {
    cell.burg = Some(Burg {
        name: name.to_string(),
        population: cell.population * 0.6,
    });
    cell
}
