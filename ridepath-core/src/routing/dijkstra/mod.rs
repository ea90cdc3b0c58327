mod state;
mod traced_dijkstra;

pub use traced_dijkstra::{ShortestPath, find_path, find_path_cancellable};
