mod state;
mod traced_dijkstra;

pub use traced_dijkstra::{shortest_path, shortest_path_length};
pub(crate) use traced_dijkstra::{ShortestPathTree, dijkstra_tree};
