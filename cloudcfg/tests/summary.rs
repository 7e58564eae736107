use cloudcfg::{Configuration, Summary};

fn summarize(config: &str) -> Summary {
    let config: Configuration = config.parse().unwrap();
    let deployment = config.validate().unwrap();
    Summary::from(&deployment)
}

#[test]
fn billing_example() {
    let summary = summarize(
        r#"{"app_name":"billing","environment":"prod","resources":{"db":{},"cache":{}}}"#,
    );
    assert_eq!(
        summary,
        Summary {
            app_name: String::from("billing"),
            environment: String::from("prod"),
            total_resources: 2,
            resource_types: vec![String::from("db"), String::from("cache")],
        }
    );
    assert_eq!(
        summary.to_string(),
        "\nConfiguration Summary:\n\
         Application: billing\n\
         Environment: prod\n\
         Total Resources: 2\n\
         Resource Types: db, cache",
    );
}

#[test]
fn resource_types_keep_file_order() {
    let summary = summarize(
        r#"{
            "app_name": "web",
            "environment": "dev",
            "resources": {"zeta": 1, "alpha": 2, "mid": 3, "beta": 4}
        }"#,
    );
    assert_eq!(summary.resource_types, ["zeta", "alpha", "mid", "beta"]);
    assert_eq!(summary.total_resources, 4);
}

#[test]
fn no_resources() {
    let summary = summarize(r#"{"app_name": "web", "environment": "dev", "resources": {}}"#);
    assert_eq!(summary.total_resources, 0);
    assert!(summary.to_string().ends_with("Resource Types: "));
}

#[test]
fn serializes_as_json() {
    let summary = summarize(
        r#"{"app_name":"billing","environment":"prod","resources":{"db":{}}}"#,
    );
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "app_name": "billing",
            "environment": "prod",
            "total_resources": 1,
            "resource_types": ["db"],
        })
    );
}
