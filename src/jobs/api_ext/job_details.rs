use crate::jobs::Job;
use serde::Serialize;
use std::net::SocketAddr;

/// Job record enriched with the address of the agent it's assigned to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(flatten)]
    pub job: Job,
    /// `None` if the agent is no longer registered.
    pub agent_address: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::JobDetails;
    use crate::tests::mock_job;
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(JobDetails {
            job: mock_job(7, 1)?,
            agent_address: Some("10.0.0.1:7070".parse()?),
        }, @r###"
        {
          "id": 7,
          "name": "backup",
          "groupId": 0,
          "agentId": 1,
          "dir": "/var/lib/backup",
          "program": "/usr/bin/backup",
          "args": "--full",
          "stdOut": "/var/log/backup.out",
          "stdErr": "/var/log/backup.err",
          "spec": "0 0 * * * *",
          "timeout": 60,
          "isMonitor": false,
          "status": 0,
          "creator": 1,
          "updater": 1,
          "createdAt": 946720800,
          "updatedAt": 946720800,
          "agentAddress": "10.0.0.1:7070"
        }
        "###);

        assert_json_snapshot!(JobDetails {
            job: mock_job(7, 1)?,
            agent_address: None,
        }, @r###"
        {
          "id": 7,
          "name": "backup",
          "groupId": 0,
          "agentId": 1,
          "dir": "/var/lib/backup",
          "program": "/usr/bin/backup",
          "args": "--full",
          "stdOut": "/var/log/backup.out",
          "stdErr": "/var/log/backup.err",
          "spec": "0 0 * * * *",
          "timeout": 60,
          "isMonitor": false,
          "status": 0,
          "creator": 1,
          "updater": 1,
          "createdAt": 946720800,
          "updatedAt": 946720800,
          "agentAddress": null
        }
        "###);

        Ok(())
    }
}
