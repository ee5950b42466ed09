use serde::Deserialize;
use std::net::IpAddr;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentsCreateParams {
    pub name: String,
    pub ip: IpAddr,
    pub port: u16,
}
