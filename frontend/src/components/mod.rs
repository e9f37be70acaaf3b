pub mod parking_board;
pub mod message_banner;
pub mod park_form;
pub mod slot_grid;
pub mod stats_bar;
