//! Item-code vocabulary of the home-care assessment form.
//!
//! Codes and valid ranges for every item the normalizer reads. The
//! assessment collaborator may store more items than these; unknown codes
//! are simply ignored.

/// Definition of one recognized assessment item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub code: &'static str,
    pub min: i64,
    pub max: i64,
}

// ADL self-performance, 0 (independent) to 6 (total dependence).
pub const ADL_BED_MOBILITY: &str = "adl_bed_mobility";
pub const ADL_TRANSFER: &str = "adl_transfer";
pub const ADL_TOILET_USE: &str = "adl_toilet_use";
pub const ADL_EATING: &str = "adl_eating";

// IADL capacity, 0 (independent) to 6; ≥3 counts as limited or worse.
pub const IADL_MEAL_PREPARATION: &str = "iadl_meal_preparation";
pub const IADL_ORDINARY_HOUSEWORK: &str = "iadl_ordinary_housework";
pub const IADL_MANAGING_FINANCES: &str = "iadl_managing_finances";
pub const IADL_MANAGING_MEDICATIONS: &str = "iadl_managing_medications";
pub const IADL_PHONE_USE: &str = "iadl_phone_use";
pub const IADL_SHOPPING: &str = "iadl_shopping";
pub const IADL_TRANSPORTATION: &str = "iadl_transportation";

// Cognition. A directly supplied `cps` wins over the derivation items.
pub const CPS: &str = "cps";
pub const COGNITIVE_SKILLS_DECISION_MAKING: &str = "cognitive_skills_daily_decision_making";
pub const SHORT_TERM_MEMORY_PROBLEM: &str = "short_term_memory_problem";
pub const MAKING_SELF_UNDERSTOOD: &str = "making_self_understood";

// Health instability.
pub const CHESS: &str = "chess";

// Extensive-service flags. Dialysis is deliberately not in this set.
pub const IV_MEDICATION: &str = "iv_medication";
pub const IV_FEEDING: &str = "iv_feeding";
pub const SUCTIONING: &str = "suctioning";
pub const TRACHEOSTOMY_CARE: &str = "tracheostomy_care";
pub const VENTILATOR: &str = "ventilator";

// Clinically-complex triggers.
pub const DIALYSIS: &str = "dialysis";
pub const CHEMOTHERAPY: &str = "chemotherapy";
pub const OXYGEN_THERAPY: &str = "oxygen_therapy";
pub const PAIN_SCALE: &str = "pain_scale";

// Special-care triggers.
pub const PRESSURE_ULCER_STAGE: &str = "pressure_ulcer_stage";
pub const SWALLOWING: &str = "swallowing";
pub const WEIGHT_LOSS: &str = "weight_loss";

// Therapy minutes received over the last 7 days.
pub const PT_MINUTES: &str = "pt_minutes";
pub const OT_MINUTES: &str = "ot_minutes";
pub const SLP_MINUTES: &str = "slp_minutes";

pub const RECENT_FALLS: &str = "recent_falls";

// Behaviour domains, 0 (not exhibited) to 3 (daily); ≥2 counts as present.
pub const BEHAVIOUR_WANDERING: &str = "behaviour_wandering";
pub const BEHAVIOUR_VERBAL_ABUSE: &str = "behaviour_verbal_abuse";
pub const BEHAVIOUR_PHYSICAL_ABUSE: &str = "behaviour_physical_abuse";
pub const BEHAVIOUR_SOCIALLY_INAPPROPRIATE: &str = "behaviour_socially_inappropriate";
pub const BEHAVIOUR_INAPPROPRIATE_PUBLIC: &str = "behaviour_inappropriate_public";
pub const BEHAVIOUR_RESISTS_CARE: &str = "behaviour_resists_care";

pub const ADL_ITEMS: [&str; 4] = [ADL_BED_MOBILITY, ADL_TRANSFER, ADL_TOILET_USE, ADL_EATING];

pub const IADL_ITEMS: [&str; 7] = [
    IADL_MEAL_PREPARATION,
    IADL_ORDINARY_HOUSEWORK,
    IADL_MANAGING_FINANCES,
    IADL_MANAGING_MEDICATIONS,
    IADL_PHONE_USE,
    IADL_SHOPPING,
    IADL_TRANSPORTATION,
];

pub const EXTENSIVE_SERVICE_ITEMS: [&str; 5] =
    [IV_MEDICATION, IV_FEEDING, SUCTIONING, TRACHEOSTOMY_CARE, VENTILATOR];

pub const BEHAVIOUR_ITEMS: [&str; 6] = [
    BEHAVIOUR_WANDERING,
    BEHAVIOUR_VERBAL_ABUSE,
    BEHAVIOUR_PHYSICAL_ABUSE,
    BEHAVIOUR_SOCIALLY_INAPPROPRIATE,
    BEHAVIOUR_INAPPROPRIATE_PUBLIC,
    BEHAVIOUR_RESISTS_CARE,
];

/// All recognized items with their valid ranges, for the diagnostics walk.
pub fn known_items() -> &'static [ItemDef] {
    static ITEMS: std::sync::LazyLock<Vec<ItemDef>> = std::sync::LazyLock::new(|| {
        let mut items = Vec::new();

        for code in ADL_ITEMS {
            items.push(ItemDef { code, min: 0, max: 6 });
        }
        for code in IADL_ITEMS {
            items.push(ItemDef { code, min: 0, max: 6 });
        }
        items.push(ItemDef { code: CPS, min: 0, max: 6 });
        items.push(ItemDef {
            code: COGNITIVE_SKILLS_DECISION_MAKING,
            min: 0,
            max: 4,
        });
        items.push(ItemDef {
            code: SHORT_TERM_MEMORY_PROBLEM,
            min: 0,
            max: 1,
        });
        items.push(ItemDef {
            code: MAKING_SELF_UNDERSTOOD,
            min: 0,
            max: 4,
        });
        items.push(ItemDef { code: CHESS, min: 0, max: 5 });
        for code in EXTENSIVE_SERVICE_ITEMS {
            items.push(ItemDef { code, min: 0, max: 1 });
        }
        for code in [DIALYSIS, CHEMOTHERAPY, OXYGEN_THERAPY, WEIGHT_LOSS] {
            items.push(ItemDef { code, min: 0, max: 1 });
        }
        items.push(ItemDef {
            code: PAIN_SCALE,
            min: 0,
            max: 3,
        });
        items.push(ItemDef {
            code: PRESSURE_ULCER_STAGE,
            min: 0,
            max: 4,
        });
        items.push(ItemDef {
            code: SWALLOWING,
            min: 0,
            max: 3,
        });
        for code in [PT_MINUTES, OT_MINUTES, SLP_MINUTES] {
            items.push(ItemDef {
                code,
                min: 0,
                max: 2520,
            });
        }
        items.push(ItemDef {
            code: RECENT_FALLS,
            min: 0,
            max: 99,
        });
        for code in BEHAVIOUR_ITEMS {
            items.push(ItemDef { code, min: 0, max: 3 });
        }

        items
    });
    &ITEMS
}
