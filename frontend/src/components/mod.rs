pub mod map_plot;
pub mod sensor_editor;
pub mod sensor_list;
pub mod sensor_map;
