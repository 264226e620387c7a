//! Storefront Config

use atelier::availability::StockPolicy;
use clap::Args;

/// Stock policy as named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StockPolicyArg {
    /// Any inventory row makes a photo orderable.
    AnyListing,

    /// Only rows with a positive quantity count.
    PositiveQuantity,
}

impl From<StockPolicyArg> for StockPolicy {
    fn from(value: StockPolicyArg) -> Self {
        match value {
            StockPolicyArg::AnyListing => Self::AnyListing,
            StockPolicyArg::PositiveQuantity => Self::PositiveQuantity,
        }
    }
}

/// Storefront settings.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Which inventory rows make a photo orderable
    #[arg(long, env = "STOCK_POLICY", value_enum, default_value_t = StockPolicyArg::AnyListing)]
    pub stock_policy: StockPolicyArg,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        storefront: StorefrontConfig,
    }

    #[test]
    fn stock_policy_defaults_to_any_listing() -> TestResult {
        let harness = Harness::try_parse_from(["atelier"])?;

        assert_eq!(
            StockPolicy::from(harness.storefront.stock_policy),
            StockPolicy::AnyListing
        );

        Ok(())
    }

    #[test]
    fn stock_policy_parses_kebab_case() -> TestResult {
        let harness =
            Harness::try_parse_from(["atelier", "--stock-policy", "positive-quantity"])?;

        assert_eq!(
            StockPolicy::from(harness.storefront.stock_policy),
            StockPolicy::PositiveQuantity
        );

        Ok(())
    }
}
