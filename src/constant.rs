/// names of values used in interactions
pub mod value {
    pub const CHOICES: &str = "choices";
    pub const NUMBER: &str = "number";
    pub const USER: &str = "user";
    pub const CHOICE: &str = "choice";
    pub const QUESTION: &str = "question";
    pub const SEARCH: &str = "search";
    pub const INTENSITY: &str = "intensity";
}

/// names of commands
pub mod commands {
    pub const CHOOSE: &str = "choose";
    pub const ROLL: &str = "roll";
    pub const FLIP: &str = "flip";
    pub const RPS: &str = "rps";
    pub const EIGHTBALL: &str = "8ball";
    pub const STOPWATCH: &str = "stopwatch";
    pub const LMGTFY: &str = "lmgtfy";
    pub const HUG: &str = "hug";
    pub const URBAN: &str = "urban";
}
