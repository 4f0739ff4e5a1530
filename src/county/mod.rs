pub mod graph;
pub mod growth;
pub mod partition;
pub mod png;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Графство — смежный кластер клеток с ограниченным населением и размером.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct County {
    /// Сквозной номер, начиная с 1, в порядке создания (не пространственный)
    pub id: u32,
    pub name: String,
    /// Клетка-зерно, от которой рос кластер
    pub seat_cell_id: u32,
    /// Клетки-члены в порядке присоединения (дубликаты исключены построением)
    pub cell_ids: Vec<u32>,
    pub province_id: u32,
    pub state_id: u32,
    /// Сумма населения клеток-членов
    pub total_population: f32,
    /// Популяционно-взвешенный центроид клеток-членов
    pub center: (f32, f32),
}

impl County {
    /// Одноклеточное графство вокруг зерна: все поля заполнены сразу.
    ///
    /// Имя берётся у бурга на клетке, иначе синтезируется как `County {id}`.
    #[must_use]
    pub fn seeded_at(id: u32, seed: &Cell) -> Self {
        let name = seed
            .burg
            .as_ref()
            .map_or_else(|| format!("County {id}"), |b| b.name.clone());
        Self {
            id,
            name,
            seat_cell_id: seed.id,
            cell_ids: vec![seed.id],
            province_id: seed.province_id,
            state_id: seed.state_id,
            total_population: seed.population,
            center: seed.center,
        }
    }
}

/// Популяционно-взвешенное среднее центров клеток.
///
/// Вес клетки — её население, но не меньше 1: клетки с нулевым населением
/// не выталкивают центроид в начало координат. Суммирование идёт в порядке
/// присоединения клеток, поэтому результат детерминирован.
#[must_use]
pub fn weighted_center(members: &[((f32, f32), f32)]) -> (f32, f32) {
    if members.is_empty() {
        return (0.0, 0.0);
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut total_weight = 0.0;

    for &((x, y), population) in members {
        let weight = if population > 0.0 { population } else { 1.0 };
        sum_x += x * weight;
        sum_y += y * weight;
        total_weight += weight;
    }

    // Вес каждой клетки не меньше 1, так что сумма весов здесь всегда > 0
    (sum_x / total_weight, sum_y / total_weight)
}
