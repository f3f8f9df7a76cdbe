use crate::core::GridState;

pub struct GameRenderState<'a> {
    pub grid: &'a GridState,
    pub level_index: usize,
    pub notice: Option<String>,
}
