//! Column definitions for the users table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 50.0;
pub const PHONE_WIDTH: f32 = 130.0;
pub const ACTIONS_WIDTH: f32 = 140.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// ID, Name, Email, Phone, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::auto().at_least(120.0),
        Column::remainder().at_least(160.0),
        Column::exact(PHONE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
