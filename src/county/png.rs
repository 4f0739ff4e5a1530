// src/county/png.rs
//! Визуализация графств в изображение
//!
//! Клетки рисуются кружками в координатах их центров: цвет — по графству,
//! тёмная метка — резиденция графства, фон — вода. Только для отладки и
//! экспорта, на само разбиение не влияет.

use std::collections::{HashMap, HashSet};

use image::{ImageBuffer, Rgba};
use imageproc::drawing::draw_filled_circle_mut;
use rand::Rng;

use crate::cell::Cell;
use crate::county::County;

pub struct CountyMap {
    pub width: u32,
    pub height: u32,
    scale: f32,
}

impl CountyMap {
    /// Холст по габаритам центров клеток; `scale` — пикселей на единицу координат.
    #[must_use]
    pub fn new(cells: &[Cell], scale: f32) -> Self {
        let mut max_x = 0.0f32;
        let mut max_y = 0.0f32;
        for cell in cells {
            max_x = max_x.max(cell.center.0);
            max_y = max_y.max(cell.center.1);
        }

        Self {
            width: ((max_x + 1.0) * scale).ceil().max(1.0) as u32,
            height: ((max_y + 1.0) * scale).ceil().max(1.0) as u32,
            scale,
        }
    }

    #[must_use]
    pub fn to_rgba_image(
        &self,
        cells: &[Cell],
        counties: &[County],
    ) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
        // Тёмно-синий фон — вода и незакрашенные места
        let mut img = ImageBuffer::from_pixel(self.width, self.height, Rgba([20, 20, 60, 255]));

        let mut colors: HashMap<u32, Rgba<u8>> = HashMap::new();
        let mut rng = rand::thread_rng();
        for county in counties {
            colors.insert(
                county.id,
                Rgba([
                    rng.gen_range(100..220),
                    rng.gen_range(120..255),
                    rng.gen_range(50..100),
                    255,
                ]),
            );
        }

        let radius = (self.scale * 0.45).max(1.0) as i32;
        for cell in cells.iter().filter(|c| c.is_land) {
            // Чёрный цвет для клетки без графства — визуальный сигнал ошибки
            let color = colors
                .get(&cell.county_id)
                .copied()
                .unwrap_or(Rgba([0, 0, 0, 255]));
            draw_filled_circle_mut(&mut img, self.to_pixel(cell.center), radius, color);
        }

        // Резиденции поверх заливки
        let seat_ids: HashSet<u32> = counties.iter().map(|c| c.seat_cell_id).collect();
        for cell in cells.iter().filter(|c| seat_ids.contains(&c.id)) {
            draw_filled_circle_mut(
                &mut img,
                self.to_pixel(cell.center),
                (radius / 2).max(1),
                Rgba([30, 30, 30, 255]),
            );
        }

        img
    }

    pub fn save_as_png(
        &self,
        cells: &[Cell],
        counties: &[County],
        path: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.to_rgba_image(cells, counties).save(path)?;
        Ok(())
    }

    fn to_pixel(&self, center: (f32, f32)) -> (i32, i32) {
        (
            (center.0 * self.scale) as i32,
            (center.1 * self.scale) as i32,
        )
    }
}
