pub mod base_ledger;
