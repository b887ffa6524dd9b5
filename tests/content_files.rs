//! Content File Integration Tests
//!
//! Loading external content documents in YAML and JSON.

use std::io::Write;

use career_details::{ContentError, ContentStore};
use tempfile::TempDir;

const YAML_CONTENT: &str = r#"
default:
  typicalDay:
    morning: [Check the schedule]
    midday: [Do the work]
    afternoon: [Wrap up]
  whatYouActuallyDo: [General work]
  whoThisIsGoodFor: [Anyone]
  topSkills: [Communication]
  entryPaths: [Apply]
careers:
  beekeeper:
    typicalDay:
      morning: [Inspect hives]
      midday: [Harvest honey]
      afternoon: [Repair frames]
      tools: [Smoker, Hive tool]
      environment: Outdoors, near flowering fields
    whatYouActuallyDo: [Keep colonies healthy]
    whoThisIsGoodFor: [People calm around bees]
    topSkills: [Patience]
    entryPaths: [Join a beekeeping association]
    realityCheck: You will get stung.
"#;

const JSON_CONTENT: &str = r#"{
  "default": {
    "typicalDay": { "morning": ["a"], "midday": ["b"], "afternoon": ["c"] },
    "whatYouActuallyDo": ["d"],
    "whoThisIsGoodFor": ["e"],
    "topSkills": ["f"],
    "entryPaths": ["g"]
  },
  "careers": {
    "lighthouse-keeper": {
      "typicalDay": { "morning": ["Climb the stairs"], "midday": ["Polish the lens"], "afternoon": ["Log the weather"] },
      "whatYouActuallyDo": ["Keep the light running"],
      "whoThisIsGoodFor": ["People who like solitude"],
      "topSkills": ["Self-reliance"],
      "entryPaths": ["Maritime authority training"]
    }
  }
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_yaml_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "careers.yaml", YAML_CONTENT);

    let store = ContentStore::from_path(&path).unwrap();
    assert_eq!(store.len(), 1);

    let beekeeper = store.get("Beekeeper");
    assert_eq!(beekeeper.reality_check.as_deref(), Some("You will get stung."));
    assert_eq!(
        beekeeper.typical_day.tools,
        Some(vec!["Smoker".to_string(), "Hive tool".to_string()])
    );
    assert_eq!(store.get("zookeeper").top_skills, vec!["Communication"]);
}

#[test]
fn test_load_yml_extension() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "careers.YML", YAML_CONTENT);

    assert!(ContentStore::from_path(&path).unwrap().contains("beekeeper"));
}

#[test]
fn test_load_json_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "careers.json", JSON_CONTENT);

    let store = ContentStore::from_path(&path).unwrap();
    assert!(store.contains("Lighthouse Keeper"));
    assert!(store.get("lighthouse-keeper").reality_check.is_none());
    assert_eq!(store.default_detail().top_skills, vec!["f"]);
}

#[test]
fn test_invalid_json_reports_json_error() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "careers.json", "{ \"careers\": ");

    let result = ContentStore::from_path(&path);
    assert!(matches!(result, Err(ContentError::Json(_))));
}

#[test]
fn test_yaml_and_json_documents_agree() {
    let from_yaml = ContentStore::from_yaml_str(YAML_CONTENT).unwrap();
    let as_json = serde_json::json!({
        "default": from_yaml.default_detail(),
        "careers": { "beekeeper": from_yaml.get("beekeeper") },
    });

    let from_json = ContentStore::from_json_str(&as_json.to_string()).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn test_error_messages_name_the_file() {
    let result = ContentStore::from_path(std::path::Path::new("/no/such/careers.yaml"));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("/no/such/careers.yaml"));
}
