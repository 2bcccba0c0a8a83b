pub mod targets {
    pub const DECISION: &str = "decision";
    pub const ELIMINATION: &str = "elimination";
    pub const PROPAGATION: &str = "propagation";
    pub const SOLVE: &str = "solve";
}
