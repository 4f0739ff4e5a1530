// src/config.rs
//! Конфигурация разбиения на графства
//!
//! Этот модуль определяет все параметры, управляющие нарезкой провинций на графства:
//! - Пороги плотности и целевое население графства
//! - Ограничение размера графства в клетках
//! - Параметры демонстрационной сетки клеток для CLI и тестов
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;

/// Настройки нарезки графств
///
/// Управляет тремя фазами разбиения: мгновенным выделением плотных клеток,
/// ростом от бургов и подбором "сирот".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CountySettings {
    /// Порог населения, при котором клетка сразу становится отдельным графством
    /// без роста (плотность сама по себе даёт автономию)
    #[serde(default = "default_high_density_threshold")]
    pub high_density_threshold: f32,

    /// Целевое суммарное население графства: рост останавливается,
    /// как только сумма достигает этого значения
    #[serde(default = "default_target_population")]
    pub target_population: f32,

    /// Максимальное число клеток в одном графстве (жёсткий предел роста)
    #[serde(default = "default_max_cells_per_county")]
    pub max_cells_per_county: usize,
}

fn default_high_density_threshold() -> f32 {
    500.0
}
fn default_target_population() -> f32 {
    200.0
}
fn default_max_cells_per_county() -> usize {
    64
}

impl Default for CountySettings {
    fn default() -> Self {
        Self {
            high_density_threshold: 500.0,
            target_population: 200.0,
            max_cells_per_county: 64,
        }
    }
}

/// Настройки демонстрационной сетки клеток
///
/// Сетка заменяет внешний генератор рельефа в CLI и интеграционных тестах:
/// клетки, высоты, население, провинции и бурги синтезируются детерминированно по сиду.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Ширина сетки в клетках (по умолчанию 128)
    #[serde(default = "default_demo_width")]
    pub width: u32,

    /// Высота сетки в клетках (по умолчанию 64)
    #[serde(default = "default_demo_height")]
    pub height: u32,

    /// Доля суши среди клеток (0.0 = вода, 1.0 = сплошная суша)
    #[serde(default = "default_land_ratio")]
    pub land_ratio: f32,

    /// Количество провинций на суше
    #[serde(default = "default_num_provinces")]
    pub num_provinces: usize,

    /// Количество бургов (поселений-зародышей)
    #[serde(default = "default_num_burgs")]
    pub num_burgs: usize,
}

fn default_demo_width() -> u32 {
    128
}
fn default_demo_height() -> u32 {
    64
}
fn default_land_ratio() -> f32 {
    0.3
}
fn default_num_provinces() -> usize {
    12
}
fn default_num_burgs() -> usize {
    40
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            land_ratio: 0.3,
            num_provinces: 12,
            num_burgs: 40,
        }
    }
}

/// Основные параметры запуска разбиения
///
/// Полная конфигурация одного прогона. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionParams {
    /// Сид генератора случайных чисел (детерминированная демо-сетка)
    pub seed: u64,

    /// Настройки нарезки графств
    #[serde(default)]
    pub counties: CountySettings,

    /// Настройки демонстрационной сетки
    #[serde(default)]
    pub demo: DemoSettings,
}

impl PartitionParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Аргументы
    /// * `path` - путь к файлу конфигурации в формате TOML
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # counties.toml
    /// seed = 42
    ///
    /// [counties]
    /// target_population = 250.0
    /// max_cells_per_county = 48
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        Ok(params)
    }
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self {
            seed: 0,
            counties: CountySettings::default(),
            demo: DemoSettings::default(),
        }
    }
}
