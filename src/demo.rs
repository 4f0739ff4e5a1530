// src/demo.rs
//! Демонстрационная сетка клеток
//!
//! Заглушка внешнего генератора мира для CLI и интеграционных тестов:
//! выдаёт тот же интерфейс, что и полный конвейер (клетки с центрами,
//! соседями, населением, провинциями и бургами). Разбиение на графства
//! от этого модуля не зависит.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cell::{Burg, Cell};
use crate::config::DemoSettings;

/// Генерирует прямоугольную сетку клеток, бесшовную по долготе.
///
/// Высоты и население — из шума на цилиндре, уровень моря подгоняется
/// под целевую долю суши, провинции — ближайшее из случайных зёрен,
/// бурги — равномерный шаг по самым населённым клеткам.
#[must_use]
pub fn generate_demo_cells(seed: u64, settings: &DemoSettings) -> Vec<Cell> {
    let width = settings.width as usize;
    let height = settings.height as usize;
    let total = width * height;
    if total == 0 {
        return Vec::new();
    }

    let width_f = settings.width as f32;
    let radius = width_f / (2.0 * std::f32::consts::PI);

    // Высоты: 3D-шум на цилиндре для бесшовности по X
    let mut noise = FastNoiseLite::new();
    noise.set_seed(Some(seed as i32));
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(4));
    noise.set_frequency(Some(0.03));

    let sample = move |noise: &FastNoiseLite, i: usize| -> f32 {
        let x = (i % width) as f32;
        let y = (i / width) as f32;
        let angle = (x / width_f) * 2.0 * std::f32::consts::PI;
        (noise.get_noise_3d(radius * angle.cos(), y, radius * angle.sin()) + 1.0) * 0.5
    };

    let elevation = map_indices(total, |i| sample(&noise, i));

    // Уровень моря — квантиль высот под целевую долю суши
    let sea_level = {
        let mut sorted = elevation.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let rank = ((1.0 - settings.land_ratio.clamp(0.0, 1.0)) * (total - 1) as f32) as usize;
        sorted[rank]
    };

    // Население: отдельный шум, возведённый в квадрат — редкие плотные очаги
    let mut pop_noise = FastNoiseLite::new();
    pop_noise.set_seed(Some(seed.wrapping_add(500) as i32));
    pop_noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    pop_noise.set_frequency(Some(0.05));

    let population = map_indices(total, |i| {
        let v = sample(&pop_noise, i);
        v * v * 800.0
    });

    let mut cells: Vec<Cell> = (0..total)
        .map(|i| {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            let id = i as u32 + 1;

            // X зацикливаем, Y ограничиваем краями
            let mut neighbor_ids = Vec::with_capacity(4);
            for &(dx, dy) in &[(0, 1), (1, 0), (0, -1), (-1, 0)] {
                let nx = (x + dx).rem_euclid(width as i32);
                let ny = y + dy;
                if ny >= 0 && ny < height as i32 {
                    neighbor_ids.push((ny * width as i32 + nx) as u32 + 1);
                }
            }

            let center = (x as f32 + 0.5, y as f32 + 0.5);
            if elevation[i] > sea_level {
                Cell::land(id, center, population[i], neighbor_ids)
            } else {
                Cell::water(id, center, neighbor_ids)
            }
        })
        .collect();

    assign_demo_provinces(&mut cells, seed, settings.num_provinces);
    place_demo_burgs(&mut cells, settings.num_burgs);

    cells
}

/// Провинции: ближайшее из случайных зёрен на суше (Вороной по центрам клеток).
fn assign_demo_provinces(cells: &mut [Cell], seed: u64, num_provinces: usize) {
    let land: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_land)
        .map(|(i, _)| i)
        .collect();
    if land.is_empty() || num_provinces == 0 {
        return;
    }

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed.wrapping_add(1_000_000));
    let mut centers = Vec::with_capacity(num_provinces);
    for _ in 0..num_provinces {
        let idx = land[rng.gen_range(0..land.len())];
        centers.push(cells[idx].center);
    }

    for &i in &land {
        let (x, y) = cells[i].center;
        let mut min_d2 = f32::MAX;
        let mut best_pid = 0u32;
        for (pid, &(cx, cy)) in centers.iter().enumerate() {
            let d2 = (x - cx).powi(2) + (y - cy).powi(2);
            if d2 < min_d2 {
                min_d2 = d2;
                best_pid = pid as u32;
            }
        }
        cells[i].province_id = best_pid + 1;
        cells[i].state_id = best_pid / 4 + 1; // по четыре провинции на штат
    }
}

/// Бурги: равномерный шаг по клеткам, отсортированным по населению.
fn place_demo_burgs(cells: &mut [Cell], num_burgs: usize) {
    let mut candidates: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_land)
        .map(|(i, _)| i)
        .collect();
    if candidates.is_empty() || num_burgs == 0 {
        return;
    }

    candidates.sort_by(|&a, &b| {
        cells[b]
            .population
            .partial_cmp(&cells[a].population)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let step = (candidates.len() - 1) / num_burgs.max(1);
    let mut placed = 0;
    for i in 0..num_burgs {
        let idx = candidates[(i * step).min(candidates.len() - 1)];
        if cells[idx].burg.is_some() {
            continue;
        }
        placed += 1;
        cells[idx].burg = Some(Burg {
            name: format!("Burg_{placed}"),
            population: cells[idx].population * 0.6,
        });
    }
}

#[cfg(feature = "parallel")]
fn map_indices<F>(total: usize, f: F) -> Vec<f32>
where
    F: Fn(usize) -> f32 + Sync + Send,
{
    (0..total).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_indices<F>(total: usize, f: F) -> Vec<f32>
where
    F: Fn(usize) -> f32,
{
    (0..total).map(f).collect()
}
