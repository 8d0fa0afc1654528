/// Fixed look and geometry of the demo screen.
///
/// Everything the windows draw comes from here; nothing is read from the
/// environment or from files.
#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub heading: String,
    pub heading_bottom: f32,
    pub button_label: String,
    pub button_width: f32,
    pub button_height: f32,
    pub message: String,
    /// Distance from the bottom edge of the button to the bottom of the message text.
    pub message_gap: f32,
    pub font_size: f32,
    pub dialog_title: String,
    pub dialog_width: f32,
    pub dialog_height: f32,
    pub dialog_message_bottom: f32,
    pub accept_label: String,
    pub accept_width: f32,
    pub accept_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Presioneme".to_string(),
            window_width: 480.0,
            window_height: 320.0,
            heading: "Aplicación de Botón".to_string(),
            heading_bottom: 40.0,
            button_label: "Presioneme".to_string(),
            button_width: 160.0,
            button_height: 48.0,
            message: "¡Botón presionado!".to_string(),
            message_gap: 60.0,
            font_size: 18.0,
            dialog_title: "Mensaje".to_string(),
            dialog_width: 300.0,
            dialog_height: 160.0,
            dialog_message_bottom: 40.0,
            accept_label: "Aceptar".to_string(),
            accept_width: 100.0,
            accept_height: 36.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_fits_inside_both_windows() {
        let config = Config::default();
        assert!(config.button_width < config.window_width);
        assert!(config.button_height < config.window_height);
        assert!(config.accept_width < config.dialog_width);
        assert!(config.accept_height < config.dialog_height);
    }

    #[test]
    fn default_texts() {
        let config = Config::default();
        assert_eq!(config.window_title, "Presioneme");
        assert_eq!(config.button_label, "Presioneme");
        assert_eq!(config.message, "¡Botón presionado!");
        assert_eq!(config.dialog_title, "Mensaje");
    }
}
