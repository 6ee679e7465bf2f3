//! Subscription plan catalog

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annually,
}

impl BillingCycle {
    pub fn toggle_label_key(&self) -> &'static str {
        match self {
            Self::Monthly => "plan-monthly",
            Self::Annually => "plan-annually",
        }
    }

    pub fn billed_label_key(&self) -> &'static str {
        match self {
            Self::Monthly => "plan-billed-monthly",
            Self::Annually => "plan-billed-annually",
        }
    }

    pub fn period_key(&self) -> &'static str {
        match self {
            Self::Monthly => "plan-per-month",
            Self::Annually => "plan-per-year",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub storage: &'static str,
    pub monthly_rwf: u32,
    pub annual_rwf: u32,
    pub recommended: bool,
}

impl Plan {
    /// Price in Rwandan francs for the selected cycle
    pub fn price_for(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_rwf,
            BillingCycle::Annually => self.annual_rwf,
        }
    }
}

pub fn catalog() -> &'static [Plan] {
    &[
        Plan {
            id: "basic",
            name: "Basic",
            storage: "50 GB",
            monthly_rwf: 15_000,
            annual_rwf: 50_000,
            recommended: false,
        },
        Plan {
            id: "standard",
            name: "Standard",
            storage: "100 GB",
            monthly_rwf: 20_000,
            annual_rwf: 100_000,
            recommended: true,
        },
        Plan {
            id: "pro",
            name: "Pro",
            storage: "1 TB",
            monthly_rwf: 300_000,
            annual_rwf: 700_000,
            recommended: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_follow_the_billing_cycle() {
        let plans = catalog();
        assert_eq!(plans[0].price_for(BillingCycle::Monthly), 15_000);
        assert_eq!(plans[0].price_for(BillingCycle::Annually), 50_000);
        assert_eq!(plans[2].price_for(BillingCycle::Monthly), 300_000);
        assert_eq!(plans[2].price_for(BillingCycle::Annually), 700_000);
    }

    #[test]
    fn exactly_one_plan_is_recommended() {
        let recommended: Vec<_> = catalog().iter().filter(|p| p.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].id, "standard");
    }
}
