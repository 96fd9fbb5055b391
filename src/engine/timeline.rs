use serde::{Deserialize, Serialize};

use crate::format;

use super::demographics::HumanImpact;
use super::economics::EconomicImpact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Recovery,
}

/// Which aggregate metric an event's callout is scaled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutBasis {
    Casualties,
    Injuries,
    AffectedPopulation,
    EconomicDamage,
}

/// One row of the projection table. `template` carries a single `{}` slot
/// for the rendered callout; `fraction` is tuning data, kept out of the
/// arithmetic below so it can be tested and adjusted on its own.
#[derive(Debug, Clone, Copy)]
pub struct EventSpec {
    pub offset: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub basis: CalloutBasis,
    pub fraction: f64,
    pub template: &'static str,
}

pub const EVENT_SPECS: [EventSpec; 11] = [
    EventSpec {
        offset: "T+0 seconds",
        title: "Impact",
        severity: Severity::Critical,
        basis: CalloutBasis::Casualties,
        fraction: 0.40,
        template: "Asteroid strikes with devastating force. Immediate vaporization at ground zero kills an estimated {} people as the shockwave begins propagating.",
    },
    EventSpec {
        offset: "T+1 minute",
        title: "Initial Destruction Wave",
        severity: Severity::Critical,
        basis: CalloutBasis::Casualties,
        fraction: 0.30,
        template: "Blast wave levels the total destruction radius. Another {} deaths as buildings collapse and firestorms ignite.",
    },
    EventSpec {
        offset: "T+10 minutes",
        title: "Secondary Effects Cascade",
        severity: Severity::Critical,
        basis: CalloutBasis::Injuries,
        fraction: 0.50,
        template: "Fires spread rapidly and power, water, and communications fail. Emergency services overwhelmed; roughly {} of the injured are still awaiting help.",
    },
    EventSpec {
        offset: "T+1 hour",
        title: "Regional Impact",
        severity: Severity::High,
        basis: CalloutBasis::Injuries,
        fraction: 0.80,
        template: "Dust cloud rising over the severe destruction zone. Roads impassable; hospitals triage {} injured at capacity.",
    },
    EventSpec {
        offset: "T+6 hours",
        title: "Emergency Response Mobilization",
        severity: Severity::High,
        basis: CalloutBasis::AffectedPopulation,
        fraction: 0.05,
        template: "Federal disaster declaration. National Guard deployed; search and rescue reaches the first {} survivors in accessible areas.",
    },
    EventSpec {
        offset: "T+1 day",
        title: "Humanitarian Crisis",
        severity: Severity::High,
        basis: CalloutBasis::AffectedPopulation,
        fraction: 0.35,
        template: "{} residents displaced into temporary shelters. Medical supply shortages; water contamination widespread.",
    },
    EventSpec {
        offset: "T+1 week",
        title: "Atmospheric Effects",
        severity: Severity::Medium,
        basis: CalloutBasis::AffectedPopulation,
        fraction: 0.60,
        template: "Atmospheric dust drops regional temperatures and hits agriculture. {} people remain displaced or without essential services; supply chains disrupted.",
    },
    EventSpec {
        offset: "T+1 month",
        title: "Economic Shockwave",
        severity: Severity::Medium,
        basis: CalloutBasis::EconomicDamage,
        fraction: 0.25,
        template: "Markets react as insurers book {} in claims. Unemployment spikes; reconstruction planning begins.",
    },
    EventSpec {
        offset: "T+3 months",
        title: "Early Recovery Phase",
        severity: Severity::Recovery,
        basis: CalloutBasis::EconomicDamage,
        fraction: 0.55,
        template: "Debris removal ongoing and assessed losses reach {}. Temporary infrastructure restored in the outer zones; resettlement programs established.",
    },
    EventSpec {
        offset: "T+6 months",
        title: "Reconstruction Begins",
        severity: Severity::Recovery,
        basis: CalloutBasis::EconomicDamage,
        fraction: 0.15,
        template: "Major reconstruction contracts worth {} awarded. Power grid partially restored; schools reopen in unaffected areas.",
    },
    EventSpec {
        offset: "T+1 year",
        title: "Long-term Recovery",
        severity: Severity::Recovery,
        basis: CalloutBasis::EconomicDamage,
        fraction: 0.30,
        template: "{} of damaged infrastructure rebuilt. Economic activity near 60% of pre-impact levels; environmental cleanup continues.",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub offset: String,
    pub title: String,
    pub severity: Severity,
    pub basis: CalloutBasis,
    /// Raw `fraction * metric` value before display rounding.
    pub callout: f64,
    pub description: String,
}

/// Expand the fixed event table against this strike's aggregate metrics.
pub fn project(human: &HumanImpact, economic: &EconomicImpact) -> Vec<TimelineEvent> {
    EVENT_SPECS
        .iter()
        .map(|spec| {
            let metric = metric_value(spec.basis, human, economic);
            let callout = metric * spec.fraction;
            let rendered = match spec.basis {
                CalloutBasis::EconomicDamage => format::dollars_billions(callout),
                _ => format::count(callout.floor() as u64),
            };
            TimelineEvent {
                offset: spec.offset.to_string(),
                title: spec.title.to_string(),
                severity: spec.severity,
                basis: spec.basis,
                callout,
                description: spec.template.replacen("{}", &rendered, 1),
            }
        })
        .collect()
}

pub fn metric_value(basis: CalloutBasis, human: &HumanImpact, economic: &EconomicImpact) -> f64 {
    match basis {
        CalloutBasis::Casualties => human.total_casualties as f64,
        CalloutBasis::Injuries => human.total_injuries as f64,
        CalloutBasis::AffectedPopulation => human.affected_population as f64,
        CalloutBasis::EconomicDamage => economic.total_damage_billions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_exactly_one_slot() {
        for spec in EVENT_SPECS {
            assert_eq!(
                spec.template.matches("{}").count(),
                1,
                "bad template for {}",
                spec.offset
            );
        }
    }

    #[test]
    fn fractions_are_sane() {
        for spec in EVENT_SPECS {
            assert!(spec.fraction > 0.0 && spec.fraction <= 1.0);
        }
    }

    #[test]
    fn events_open_critical_and_close_in_recovery() {
        assert_eq!(EVENT_SPECS[0].severity, Severity::Critical);
        assert_eq!(EVENT_SPECS[0].offset, "T+0 seconds");
        let last = EVENT_SPECS[EVENT_SPECS.len() - 1];
        assert_eq!(last.severity, Severity::Recovery);
        assert_eq!(last.offset, "T+1 year");
    }
}
