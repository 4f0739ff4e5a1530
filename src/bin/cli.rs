use clap::Parser;
use countygen::county::graph::build_county_graph;
use countygen::county::png::CountyMap;
use countygen::demo::generate_demo_cells;
use countygen::{Cell, PartitionParams, partition_counties};
use std::fs;
use std::path::PathBuf;

/// Нарезка графств для Chronicles of Realms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML (по умолчанию — встроенные параметры)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Входной файл клеток в формате JSON; если не задан — генерируется демо-сетка
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Путь для сохранения графств (по умолчанию: ./counties.json)
    #[arg(short, long, default_value = "counties.json")]
    output: PathBuf,

    /// Путь для PNG-превью разбиения (если не задан, превью не сохраняется)
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let params = match &cli.config {
        Some(path) => {
            println!("🔍 Загрузка конфигурации...");
            PartitionParams::from_toml_file(path.to_str().unwrap())?
        }
        None => PartitionParams::default(),
    };

    let mut cells: Vec<Cell> = match &cli.input {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => {
            println!(
                "🌍 Генерация демо-сетки {}×{}...",
                params.demo.width, params.demo.height
            );
            generate_demo_cells(params.seed, &params.demo)
        }
    };

    println!("Нарезка графств ({} клеток)...", cells.len());
    let counties = partition_counties(&mut cells, &params.counties);
    println!("🏰 Создано {} графств.", counties.len());

    let graph = build_county_graph(&cells, &counties);
    println!("Смежностей между графствами: {}.", graph.edge_count());

    fs::write(&cli.output, serde_json::to_string_pretty(&counties)?)?;

    if let Some(png_path) = &cli.png {
        println!("Сохранение превью в {png_path:?}");
        CountyMap::new(&cells, 8.0).save_as_png(&cells, &counties, png_path.to_str().unwrap())?;
    }

    println!("\nГотово! Графства сохранены в {:?}", cli.output);
    Ok(())
}
