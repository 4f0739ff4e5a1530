// src/cell.rs
use serde::{Deserialize, Serialize};

/// Бург — поселение-зародыш на клетке.
///
/// Наличие бурга делает клетку приоритетным зерном графства и даёт графству имя.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Burg {
    pub name: String,
    /// Население самого поселения (подсказка для потребителей ниже по конвейеру,
    /// в рост графства не входит)
    pub population: f32,
}

/// Клетка терренового графа.
///
/// Граф строится выше по конвейеру (генератор рельефа и политической карты);
/// здесь клетка читается целиком, мутируется только `county_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: u32,
    pub center: (f32, f32),
    /// Соседи по смежности. Список может содержать дубликаты и "висячие" ID
    /// несуществующих клеток — все обращения только через защищённый поиск.
    pub neighbor_ids: Vec<u32>,
    pub is_land: bool,
    pub population: f32,
    /// Провинция (0 = вне провинций, глобальная корзина)
    #[serde(default)]
    pub province_id: u32,
    #[serde(default)]
    pub state_id: u32,
    /// Графство (0 = не назначено); заполняется разбиением
    #[serde(default)]
    pub county_id: u32,
    #[serde(default)]
    pub burg: Option<Burg>,
}

impl Cell {
    /// Сухопутная клетка без провинции, штата и бурга.
    #[must_use]
    pub fn land(id: u32, center: (f32, f32), population: f32, neighbor_ids: Vec<u32>) -> Self {
        Self {
            id,
            center,
            neighbor_ids,
            is_land: true,
            population,
            province_id: 0,
            state_id: 0,
            county_id: 0,
            burg: None,
        }
    }

    /// Водная клетка: в разбиении не участвует.
    #[must_use]
    pub fn water(id: u32, center: (f32, f32), neighbor_ids: Vec<u32>) -> Self {
        Self {
            id,
            center,
            neighbor_ids,
            is_land: false,
            population: 0.0,
            province_id: 0,
            state_id: 0,
            county_id: 0,
            burg: None,
        }
    }
}
