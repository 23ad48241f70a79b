use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Above this many outputs in the `other` bucket we nag the user to consolidate.
pub const WALLET_CONSOLIDATE_UTXOS: u64 = 400;

/// Wallets holding more than this are worth counting outputs for.
pub const LARGE_WALLET_BALANCE: f64 = 100.;

/// Account details report fiat figures in cents.
pub const CENTS_PER_UNIT: f64 = 100.;

/// The wallet's balances as reported by the backend, in credits.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub balance: f64,
    #[serde(default)]
    pub claims_balance: f64,
    #[serde(default)]
    pub supports_balance: f64,
    #[serde(default)]
    pub tips_balance: f64,
}

impl BalanceSnapshot {
    pub fn total_balance(&self) -> f64 {
        self.balance + self.tips_balance + self.supports_balance + self.claims_balance
    }

    /// Everything earned or staked that has to be unlocked before it can be spent.
    pub fn total_locked(&self) -> f64 {
        self.tips_balance + self.claims_balance + self.supports_balance
    }

    pub fn is_large_wallet(&self) -> bool {
        self.balance > LARGE_WALLET_BALANCE
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoCounts(pub HashMap<String, u64>);

impl UtxoCounts {
    pub const OTHER: &'static str = "other";

    pub fn get(&self, category: &str) -> u64 {
        self.0.get(category).copied().unwrap_or(0)
    }

    pub fn other(&self) -> u64 {
        self.get(Self::OTHER)
    }

    pub fn set(&mut self, category: &str, count: u64) {
        self.0.insert(category.to_string(), count);
    }
}

/// `other` count for counts that may not have been fetched yet.
pub fn other_count(counts: Option<&UtxoCounts>) -> u64 {
    counts.map_or(0, UtxoCounts::other)
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// Cents
    pub total_tipped: u64,
    /// Cents
    #[serde(default)]
    pub total_withdrawn: u64,
}

impl AccountDetails {
    pub fn total_received(&self) -> f64 {
        self.total_tipped as f64 / CENTS_PER_UNIT
    }

    pub fn total_withdrawn(&self) -> f64 {
        self.total_withdrawn as f64 / CENTS_PER_UNIT
    }
}

/// Wallet operations the core is busy with. Owned by the core, mirrored here.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperations {
    pub mass_claim_is_pending: bool,
    pub mass_claiming_tips: bool,
    pub consolidate_is_pending: bool,
    pub consolidating_utxos: bool,
}

impl PendingOperations {
    pub fn operation_pending(&self) -> bool {
        self.mass_claim_is_pending
            || self.mass_claiming_tips
            || self.consolidate_is_pending
            || self.consolidating_utxos
    }

    pub fn consolidation_active(&self) -> bool {
        self.consolidate_is_pending || self.consolidating_utxos
    }
}

pub fn should_prompt_consolidation(other_count: u64, pending: &PendingOperations) -> bool {
    other_count > WALLET_CONSOLIDATE_UTXOS || pending.consolidation_active()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(balance: f64, tips: f64, claims: f64, supports: f64) -> BalanceSnapshot {
        BalanceSnapshot {
            balance,
            claims_balance: claims,
            supports_balance: supports,
            tips_balance: tips,
        }
    }

    #[test]
    fn test_totals() {
        let cases = [
            snapshot(0., 0., 0., 0.),
            snapshot(12.5, 0., 0., 0.),
            snapshot(1., 2., 3., 4.),
            snapshot(250., 0.0001, 17.25, 0.5),
        ];

        for s in cases {
            let sum = s.balance + s.tips_balance + s.supports_balance + s.claims_balance;
            assert_eq!(s.total_balance(), sum);
            assert!((s.total_locked() - (s.total_balance() - s.balance)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_large_wallet_boundary() {
        assert!(!snapshot(100., 0., 0., 0.).is_large_wallet());
        assert!(snapshot(100.01, 0., 0., 0.).is_large_wallet());
        // locked funds don't count towards it
        assert!(!snapshot(50., 60., 0., 0.).is_large_wallet());
    }

    #[test]
    fn test_utxo_counts_default_to_zero() {
        assert_eq!(other_count(None), 0);

        let mut counts = UtxoCounts::default();
        assert_eq!(other_count(Some(&counts)), 0);

        counts.set("support", 12);
        assert_eq!(counts.other(), 0);
        assert_eq!(counts.get("support"), 12);

        counts.set(UtxoCounts::OTHER, 401);
        assert_eq!(other_count(Some(&counts)), 401);
    }

    #[test]
    fn test_each_flag_marks_operation_pending() {
        assert!(!PendingOperations::default().operation_pending());

        let flags = [
            PendingOperations {
                mass_claim_is_pending: true,
                ..Default::default()
            },
            PendingOperations {
                mass_claiming_tips: true,
                ..Default::default()
            },
            PendingOperations {
                consolidate_is_pending: true,
                ..Default::default()
            },
            PendingOperations {
                consolidating_utxos: true,
                ..Default::default()
            },
        ];

        for pending in flags {
            assert!(pending.operation_pending(), "{pending:?}");
        }
    }

    #[test]
    fn test_consolidation_prompt_threshold() {
        let idle = PendingOperations::default();
        assert!(!should_prompt_consolidation(0, &idle));
        assert!(!should_prompt_consolidation(400, &idle));
        assert!(should_prompt_consolidation(401, &idle));

        let pending = PendingOperations {
            consolidate_is_pending: true,
            ..Default::default()
        };
        assert!(should_prompt_consolidation(400, &pending));

        let running = PendingOperations {
            consolidating_utxos: true,
            ..Default::default()
        };
        assert!(should_prompt_consolidation(0, &running));

        // a tip claim alone doesn't bring the prompt up
        let claiming = PendingOperations {
            mass_claiming_tips: true,
            ..Default::default()
        };
        assert!(!should_prompt_consolidation(0, &claiming));
    }

    #[test]
    fn test_account_details_in_cents() {
        let details = AccountDetails {
            total_tipped: 31_300,
            total_withdrawn: 10_000,
        };
        assert_eq!(details.total_received(), 313.);
        assert_eq!(details.total_withdrawn(), 100.);
    }

    #[test]
    fn test_snapshot_from_json() {
        let s: BalanceSnapshot = serde_json::from_str(r#"{"balance": 4.5, "tips_balance": 1}"#)
            .expect("should parse");
        assert_eq!(s.balance, 4.5);
        assert_eq!(s.tips_balance, 1.);
        assert_eq!(s.claims_balance, 0.);
    }
}
