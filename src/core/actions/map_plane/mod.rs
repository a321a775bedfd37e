pub mod map_plane;
