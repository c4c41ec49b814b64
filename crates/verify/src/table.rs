//! Skill records and the per-model skill table.

/// What a skill row verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTarget {
    /// Ensemble mean at one lead (1-based).
    EnsembleMean(usize),
    /// Calibrated deterministic simulation, pooled over all leads.
    Calibrated,
    /// Raw simulation, pooled over all leads.
    Raw,
}

/// Skill metrics of one predictor. Undefined metrics are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillRecord {
    pub target: SkillTarget,
    pub correlation: Option<f64>,
    pub efficiency: Option<f64>,
    pub bias: Option<f64>,
    pub rmse: Option<f64>,
    /// Number of paired samples.
    pub n: usize,
}

/// `L` ensemble-mean rows followed by the calibrated and raw rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTable {
    n_leads: usize,
    records: Vec<SkillRecord>,
}

impl SkillTable {
    pub(crate) fn new(n_leads: usize, records: Vec<SkillRecord>) -> Self {
        Self { n_leads, records }
    }

    /// Number of leads.
    pub fn n_leads(&self) -> usize {
        self.n_leads
    }

    /// All rows in output order.
    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    /// Ensemble-mean row of `lead` (1-based).
    pub fn lead(&self, lead: usize) -> Option<&SkillRecord> {
        lead.checked_sub(1).and_then(|i| self.records[..self.n_leads].get(i))
    }

    /// Calibrated-simulation row (`L + 1`).
    pub fn calibrated(&self) -> &SkillRecord {
        &self.records[self.n_leads]
    }

    /// Raw-simulation row (`L + 2`).
    pub fn raw(&self) -> &SkillRecord {
        &self.records[self.n_leads + 1]
    }

    /// 1-based row number written in the `LeadTime` column.
    pub fn row_number(&self, target: SkillTarget) -> usize {
        match target {
            SkillTarget::EnsembleMean(lead) => lead,
            SkillTarget::Calibrated => self.n_leads + 1,
            SkillTarget::Raw => self.n_leads + 2,
        }
    }
}
