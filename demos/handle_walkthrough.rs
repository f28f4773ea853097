//! Handle Walkthrough
//!
//! A public `Account` type hiding its body behind a handle, run once with
//! each storage strategy. Copies are deep, transfers leave a moved-from
//! source behind, and drops are deterministic.
//!
//! Run with `RUST_LOG` unset; events are printed at INFO.

use valsem::prelude::*;
use valsem::survival::{Exponential, Survival};

// =============================================================================
// A public type with a private body
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
struct AccountBody {
    owner: String,
    balance: i64,
}

impl Drop for AccountBody {
    fn drop(&mut self) {
        if !self.owner.is_empty() {
            tracing::info!(owner = %self.owner, balance = self.balance, "account body dropped");
        }
    }
}

#[derive(Clone, Default)]
struct Account {
    body: InlineHandle<AccountBody>,
}

impl Account {
    fn open(owner: &str) -> Self {
        Self { body: InlineHandle::new(AccountBody { owner: owner.into(), balance: 0 }) }
    }

    fn deposit(&mut self, amount: i64) {
        self.body.balance += amount;
    }

    fn summary(&self) -> String {
        match self.body.get() {
            Some(b) => format!("{}: {}", b.owner, b.balance),
            None => String::from("<moved-from>"),
        }
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

fn inline_account() {
    tracing::info!(mode = ?InlineHandle::<AccountBody>::MODE, "inline account");

    let mut alice = Account::open("alice");
    alice.deposit(100);

    let mut snapshot = alice.clone();
    alice.deposit(50);
    tracing::info!(alice = %alice.summary(), snapshot = %snapshot.summary(), "after copy");

    let moved = Account { body: snapshot.body.transfer() };
    tracing::info!(moved = %moved.summary(), source = %snapshot.summary(), "after transfer");
}

fn boxed_body() {
    type Ledger = InlineHandle<[i64; 16], 16>;
    tracing::info!(mode = ?Ledger::MODE, "boxed ledger");

    let mut ledger = Ledger::default();
    ledger[0] = 7;
    let copy = ledger.clone();
    let moved = ledger.transfer();
    tracing::info!(
        copy = copy[0],
        moved = moved[0],
        source_moved_from = ledger.is_moved_from(),
        "after transfer"
    );

    // A moved-from handle only accepts assignment.
    ledger.clone_from(&copy);
    tracing::info!(restored = ledger[0], "after reassignment");
}

fn opaque_model() {
    let model = OpaqueHandle::new(Exponential::new(0.1));
    let mut stressed = model.clone();
    stressed.rate *= 3.0;

    for t in [1.0, 5.0, 10.0] {
        match (model.survival_prob(t), stressed.survival_prob(t)) {
            (Ok(base), Ok(stress)) => tracing::info!(t, base, stress, "survival"),
            (Err(e), _) | (_, Err(e)) => tracing::warn!(t, error = %e, "survival failed"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    inline_account();
    boxed_body();
    opaque_model();
}
