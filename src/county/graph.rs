// src/county/graph.rs
use std::collections::{HashMap, HashSet};

use petgraph::graph::UnGraph;

use crate::cell::Cell;
use crate::county::County;

/// Строит граф смежности графств по смежности их клеток.
///
/// Узлы — ID графств, ребро — хотя бы одна пара соседних клеток из разных
/// графств. Потребители ниже по конвейеру (экономика, торговля) ходят по
/// этому графу, не возвращаясь к клеткам.
#[must_use]
pub fn build_county_graph(cells: &[Cell], counties: &[County]) -> UnGraph<u32, ()> {
    let mut graph = UnGraph::new_undirected();
    let mut id_to_node = HashMap::new();

    for county in counties {
        let node = graph.add_node(county.id);
        id_to_node.insert(county.id, node);
    }

    // Быстрый доступ: ID клетки -> ID её графства
    let county_of: HashMap<u32, u32> = cells
        .iter()
        .filter(|c| c.county_id > 0)
        .map(|c| (c.id, c.county_id))
        .collect();

    let mut edges = HashSet::new();

    for cell in cells.iter().filter(|c| c.county_id > 0) {
        for nid in &cell.neighbor_ids {
            // Висячие ID и вода отсеиваются отсутствием в county_of
            let Some(&n_county) = county_of.get(nid) else {
                continue;
            };
            if n_county == cell.county_id {
                continue;
            }

            let (a, b) = if cell.county_id < n_county {
                (cell.county_id, n_county)
            } else {
                (n_county, cell.county_id)
            };
            if edges.insert((a, b))
                && let (Some(&na), Some(&nb)) = (id_to_node.get(&a), id_to_node.get(&b))
            {
                graph.add_edge(na, nb, ());
            }
        }
    }

    graph
}
