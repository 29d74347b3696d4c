//! GraphQL documents sent to the Politics and War API.

pub const ALLIANCE_INFO: &str = r#"
query GetAllianceInfo($id: [Int!]) {
  alliances(id: $id) {
    data {
      id
      name
      acronym
      score
      nations {
        id
        nation_name
        leader_name
        alliance_id
        alliance_position
        score
        num_cities
      }
    }
  }
}
"#;

pub const ALLIANCE_WARS: &str = r#"
query GetAllianceWars($allianceId: [Int!], $active: Boolean) {
  wars(alliance_id: $allianceId, active: $active, first: 100) {
    data {
      id
      date
      turns_left
      attacker { id nation_name alliance { id name } }
      defender { id nation_name alliance { id name } }
    }
  }
}
"#;

#[allow(dead_code)]
pub const RECENT_WARS: &str = r#"
query GetRecentWars($after: DateTime) {
  wars(after: $after, first: 100) {
    data {
      id
      date
      turns_left
      attacker { id nation_name alliance { id name } }
      defender { id nation_name alliance { id name } }
    }
  }
}
"#;

#[allow(dead_code)]
pub const NATION_INFO: &str = r#"
query GetNationInfo($id: [Int!]) {
  nations(id: $id) {
    data {
      id
      nation_name
      leader_name
      alliance_id
      alliance_position
      score
      num_cities
      wars(limit: 10, active: true) {
        id
        date
        turns_left
        attacker { id nation_name alliance { id name } }
        defender { id nation_name alliance { id name } }
      }
    }
  }
}
"#;

pub const API_KEY_PROBE: &str = r#"
query TestQuery {
  nations(first: 1) {
    data {
      id
      nation_name
    }
  }
}
"#;
