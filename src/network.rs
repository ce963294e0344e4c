use std::fmt;
use std::str::FromStr;

use crate::ClientError;

/// Deployment stage of the Cexplorer API.
///
/// Each stage maps to a distinct HTTPS origin carrying a fixed `/v1`
/// version segment. The mapping is exhaustive; unsupported identifiers
/// fail to parse with [`ClientError::UnknownNetwork`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Cardano mainnet.
    MainnetStage,
    /// Pre-production testnet.
    PreprodStage,
    /// Preview testnet.
    PreviewStage,
}

impl Network {
    /// Returns the API origin for this network, version segment included.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::MainnetStage => "https://api-mainnet-stage.cexplorer.io/v1",
            Self::PreprodStage => "https://api-preprod-stage.cexplorer.io/v1",
            Self::PreviewStage => "https://api-preview-stage.cexplorer.io/v1",
        }
    }

    /// Returns the symbolic identifier used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainnetStage => "mainnet-stage",
            Self::PreprodStage => "preprod-stage",
            Self::PreviewStage => "preview-stage",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mainnet-stage" => Ok(Self::MainnetStage),
            "preprod-stage" => Ok(Self::PreprodStage),
            "preview-stage" => Ok(Self::PreviewStage),
            other => Err(ClientError::UnknownNetwork(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Network;
    use crate::ClientError;

    #[test]
    fn every_network_resolves_to_an_https_origin() {
        for network in [
            Network::MainnetStage,
            Network::PreprodStage,
            Network::PreviewStage,
        ] {
            let base = network.base_url();
            assert!(base.starts_with("https://"), "not https: {base}");
            assert!(base.ends_with("/v1"), "missing version segment: {base}");
        }
    }

    #[test]
    fn identifiers_round_trip_through_parse() {
        for identifier in ["mainnet-stage", "preprod-stage", "preview-stage"] {
            let network: Network = identifier.parse().expect("supported identifier");
            assert_eq!(network.as_str(), identifier);
        }
    }

    #[test]
    fn unsupported_identifier_is_rejected() {
        let error = "devnet".parse::<Network>().expect_err("unsupported");
        match error {
            ClientError::UnknownNetwork(name) => assert_eq!(name, "devnet"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
