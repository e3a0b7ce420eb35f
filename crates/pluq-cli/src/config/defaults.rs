pub struct DefaultsConfig {
    pub experiment: String,
    pub confidence_level: u32,
    pub cutoff: f64,
    pub frequency_weighting: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            experiment: "c".to_string(),
            confidence_level: 95,
            // Negative keeps every row, including partial assignments.
            cutoff: -1.0,
            frequency_weighting: true,
        }
    }
}
