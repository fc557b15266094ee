use serde::{Deserialize, Serialize};

/// Response of the owned-NFT listing endpoint.
///
/// Results are paginated; a present `page_key` means more tokens are available
/// and must be requested with `&pageKey=<key>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnedNftsResponse {
    #[serde(default)]
    pub owned_nfts: Vec<OwnedNft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

/// One token held by the queried owner
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnedNft {
    pub contract: NftContract,
    pub id: NftId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<NftMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NftMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftContract {
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftId {
    /// Token id as returned by the API (0x-prefixed hex)
    pub token_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_metadata: Option<TokenMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftMedia {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub gateway: String,
}

/// Raw token metadata (the JSON document behind `tokenURI`).
///
/// Only the fields the dashboard displays are modelled; anything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl OwnedNft {
    /// Token id in decimal when it fits in a `u128`, otherwise the raw API value.
    pub fn token_id(&self) -> String {
        let raw = self.id.token_id.trim();
        let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
            Some(hex) => u128::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u128>().ok(),
        };
        parsed.map(|id| id.to_string()).unwrap_or_else(|| raw.to_string())
    }

    /// Name to display: metadata name, then title, then `#<token id>`.
    pub fn display_name(&self) -> String {
        self.metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .or_else(|| (!self.title.trim().is_empty()).then(|| self.title.clone()))
            .unwrap_or_else(|| format!("#{}", self.token_id()))
    }

    /// Image location: `media[0].raw`, falling back to the gateway URL and then
    /// the metadata `image` field.
    pub fn media_url(&self) -> Option<String> {
        let first = self.media.first();
        first
            .map(|m| m.raw.as_str())
            .filter(|raw| !raw.is_empty())
            .or_else(|| first.map(|m| m.gateway.as_str()).filter(|g| !g.is_empty()))
            .or_else(|| self.metadata.as_ref().and_then(|m| m.image.as_deref()))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ownedNfts": [
            {
                "contract": { "address": "0x21A5550016994D91450E7E83B34D0300D4ECCCA5" },
                "id": { "tokenId": "0x000000000000000000000000000000000000000000000000000000000000000a", "tokenMetadata": { "tokenType": "ERC721" } },
                "title": "Alchemon #10",
                "description": "",
                "media": [{ "raw": "ipfs://QmHash/10.png", "gateway": "https://ipfs.io/ipfs/QmHash/10.png" }],
                "metadata": { "name": "Pyroclaw", "image": "ipfs://QmHash/10.png", "attributes": [] },
                "timeLastUpdated": "2023-04-01T00:00:00.000Z"
            },
            {
                "contract": { "address": "0xffff" },
                "id": { "tokenId": "7" }
            }
        ],
        "pageKey": "next-page",
        "totalCount": 2,
        "blockHash": "0xdeadbeef"
    }"#;

    #[test]
    fn test_parse_owned_nfts_response() {
        let response: OwnedNftsResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(response.owned_nfts.len(), 2);
        assert_eq!(response.page_key.as_deref(), Some("next-page"));
        assert_eq!(response.total_count, Some(2));

        let first = &response.owned_nfts[0];
        assert_eq!(first.contract.address, "0x21A5550016994D91450E7E83B34D0300D4ECCCA5");
        assert_eq!(
            first.id.token_metadata.as_ref().and_then(|t| t.token_type.as_deref()),
            Some("ERC721")
        );
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let response: OwnedNftsResponse = serde_json::from_str(SAMPLE).unwrap();
        let bare = &response.owned_nfts[1];

        assert!(bare.media.is_empty());
        assert!(bare.metadata.is_none());
        assert_eq!(bare.title, "");
        assert_eq!(bare.media_url(), None);
    }

    #[test]
    fn test_token_id_decimal() {
        let response: OwnedNftsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.owned_nfts[0].token_id(), "10");
        assert_eq!(response.owned_nfts[1].token_id(), "7");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut nft = OwnedNft {
            title: "Alchemon #3".to_string(),
            id: NftId { token_id: "0x3".to_string(), token_metadata: None },
            metadata: Some(NftMetadata { name: Some("Voltwing".to_string()), ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(nft.display_name(), "Voltwing");

        nft.metadata = None;
        assert_eq!(nft.display_name(), "Alchemon #3");

        nft.title.clear();
        assert_eq!(nft.display_name(), "#3");
    }

    #[test]
    fn test_media_url_prefers_raw() {
        let nft = OwnedNft {
            media: vec![NftMedia { raw: String::new(), gateway: "https://gw/1.png".to_string() }],
            ..Default::default()
        };
        assert_eq!(nft.media_url().as_deref(), Some("https://gw/1.png"));

        let response: OwnedNftsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.owned_nfts[0].media_url().as_deref(), Some("ipfs://QmHash/10.png"));
    }
}
