/// where a transition rule of a generated level leads. targets are symbolic until
/// the builder knows the size of every section of the final automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// the trailing prohibit level
    Trap,
    /// the level the rule belongs to
    Stay,
    /// the k-th prepended access level
    Access(usize),
    /// the k-th appended egress level
    Egress(usize),
    /// the copy of the first template level
    FirstTemplate,
    /// the template's own target for the same mode, renumbered into the final list
    Template,
}

/// a hand-built access or egress level.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedLevel {
    pub description: String,
    pub destinations_reachable: bool,
    /// target for every transit mode of the first template level
    pub transit: Target,
    /// rules for the access, egress and auxiliary modes
    pub rules: Vec<(char, Target)>,
}

impl AddedLevel {
    pub fn new(
        description: &str,
        destinations_reachable: bool,
        transit: Target,
        rules: Vec<(char, Target)>,
    ) -> Self {
        Self {
            description: description.to_string(),
            destinations_reachable,
            transit,
            rules,
        }
    }
}

/// parameters of the single offset-and-splice construction shared by all variants.
///
/// the final automaton is laid out as
/// `[access levels][template copies][egress levels][prohibit level]`.
/// template targets are authored relative to one prepended level and are shifted by
/// `access_levels.len() - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDescriptor {
    pub access_levels: Vec<AddedLevel>,
    pub egress_levels: Vec<AddedLevel>,
    /// rules appended to every template copy
    pub template_rules: Vec<(char, Target)>,
    /// replaces the reachability flag of every template copy when set
    pub template_reachable: Option<bool>,
    /// append a prohibit level absorbing every mode
    pub trap: bool,
}

impl VariantDescriptor {
    /// modes added on top of the template's transit modes, in authoring order.
    pub fn extra_modes(&self) -> Vec<char> {
        self.template_rules.iter().map(|(m, _)| *m).collect()
    }
}
