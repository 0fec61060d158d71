use crate::presentation::view_models::{
    CardViewModel, StatusBarViewModel, StatusLevel, TuiScreenViewModel,
};

pub fn present_screen(
    card: CardViewModel,
    message: impl Into<String>,
    level: StatusLevel,
    calls_logged: usize,
) -> TuiScreenViewModel {
    TuiScreenViewModel {
        card,
        status_bar: StatusBarViewModel {
            message: message.into(),
            level,
            calls_logged,
        },
    }
}
