use std::str::FromStr;

/// Lifecycle phase reported by the shell hosting the sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenePhase {
    Active,
    Inactive,
    Background,
}

impl FromStr for ScenePhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ScenePhase::Active),
            "inactive" => Ok(ScenePhase::Inactive),
            "background" | "bg" => Ok(ScenePhase::Background),
            other => Err(format!("Unknown scene phase {}", other)),
        }
    }
}
