// ABOUTME: Integration tests verifying modules work together.
// ABOUTME: Drives the JSON dispatch surface the way a front end would.

use serde_json::{Value, json};
use toolreg::prelude::*;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("dispatch output should be JSON")
}

fn startup() -> Dispatcher {
    let registry = builtin_registry().expect("built-in tools should register");
    Dispatcher::new(registry)
}

/// A user-defined tool implemented directly against the trait.
struct ShoutTool;

#[async_trait::async_trait]
impl Tool for ShoutTool {
    fn name(&self) -> &str {
        "Shout"
    }

    fn description(&self) -> &str {
        "Upper-cases text."
    }

    fn schema(&self) -> Value {
        positional_schema([("text", ParamType::Str), ("times", ParamType::Int)])
    }

    async fn execute(&self, args: Args) -> Result<Value, anyhow::Error> {
        args.expect_arity(2)?;
        let text = args.str(0)?.to_uppercase();
        let times = usize::try_from(args.int(1)?)?;
        Ok(json!(vec![text; times].join(" ")))
    }
}

#[tokio::test]
async fn test_documented_surface() {
    let dispatcher = startup();

    assert_eq!(
        parse(&dispatcher.list_tools_json()),
        json!({"tools": ["add", "subtract", "greet"]})
    );
    assert_eq!(
        parse(&dispatcher.describe_tool_json("add")),
        json!({
            "name": "add",
            "description": "Adds two numbers together. Usage: add(a, b).",
            "parameters": [{"name": "a", "type": "int"}, {"name": "b", "type": "int"}]
        })
    );
    assert_eq!(
        parse(&dispatcher.invoke_tool_json("add", "[2,3]").await),
        json!({"tool": "add", "result": 5})
    );
    assert_eq!(
        parse(&dispatcher.invoke_tool_json("subtract", "[5,3]").await),
        json!({"tool": "subtract", "result": 2})
    );
    assert_eq!(
        parse(&dispatcher.invoke_tool_json("greet", r#"["Ava"]"#).await),
        json!({"tool": "greet", "result": "Hello, Ava!"})
    );
    assert_eq!(
        parse(&dispatcher.invoke_tool_json("nope", "[]").await),
        json!({"error": "Tool 'nope' not found."})
    );
}

#[tokio::test]
async fn test_error_payloads_are_single_key_objects() {
    let dispatcher = startup();

    for (name, args) in [("add", "not-json"), ("add", "[1]"), ("greet", "[1, 2]")] {
        let value = parse(&dispatcher.invoke_tool_json(name, args).await);
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(
            object["error"]
                .as_str()
                .unwrap()
                .starts_with("Error executing tool:")
        );
    }
}

#[tokio::test]
async fn test_selection_surface() {
    let dispatcher = startup();

    let hit = parse(&dispatcher.select_tool_json("please add 2 and 2").await);
    assert_eq!(hit["selectedTool"], "add");
    assert_eq!(hit["note"], "Simulated response.");

    let fallback = parse(&dispatcher.select_tool_json("banana").await);
    assert_eq!(fallback["selectedTool"], "add");
    assert!(
        fallback["note"]
            .as_str()
            .unwrap()
            .ends_with("fallback response.")
    );

    let empty = Dispatcher::new(Registry::new());
    assert_eq!(
        parse(&empty.select_tool_json("add").await),
        json!({"error": "No tools available."})
    );
}

#[tokio::test]
async fn test_custom_tool_alongside_builtins() {
    let mut registry = builtin_registry().unwrap();
    registry.register(ShoutTool).unwrap();
    let dispatcher = Dispatcher::new(registry).with_format(PayloadFormat::Compact);

    assert_eq!(
        dispatcher.list_tools_json(),
        r#"{"tools":["add","subtract","greet","Shout"]}"#
    );
    assert_eq!(
        dispatcher.invoke_tool_json("shout", r#"["hey", 2]"#).await,
        r#"{"tool":"Shout","result":"HEY HEY"}"#
    );

    let negative = parse(&dispatcher.invoke_tool_json("SHOUT", r#"["hey", -1]"#).await);
    assert!(
        negative["error"]
            .as_str()
            .unwrap()
            .starts_with("Error executing tool:")
    );

    let selection = parse(&dispatcher.select_tool_json("shout it out").await);
    assert_eq!(selection["selectedTool"], "Shout");
}

#[test]
fn test_duplicate_registration_aborts_startup() {
    let mut registry = builtin_registry().unwrap();
    let clash = FnTool::builder("Greet").handler(|_| Ok(Value::Null));

    let err = registry.register(clash).unwrap_err();
    assert!(err.is_registration());
    assert_eq!(err.to_string(), "Tool 'Greet' is already registered");
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_registry_lookup_case_properties() {
    let registry = builtin_registry().unwrap();
    for name in registry.list() {
        let exact = registry.lookup(&name).unwrap().name().to_string();
        let upper = registry.lookup(&name.to_uppercase()).unwrap().name().to_string();
        let lower = registry.lookup(&name.to_lowercase()).unwrap().name().to_string();
        assert_eq!(exact, upper);
        assert_eq!(exact, lower);
    }
}

#[test]
fn test_dispatcher_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Dispatcher>();
}

#[tokio::test]
async fn test_model_strategy_plugs_in() {
    struct Fixed;

    #[async_trait::async_trait]
    impl ModelBackend for Fixed {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, SelectionError> {
            Ok("greet".to_string())
        }
    }

    let dispatcher = startup().with_strategy(ModelSelector::new(Fixed));
    let selection = parse(&dispatcher.select_tool_json("please add 2 and 2").await);
    assert_eq!(selection["selectedTool"], "greet");
    assert_eq!(selection["note"], "Model response.");
}

#[test]
fn test_lookup_results() {
    let registry = builtin_registry().unwrap();
    tokio_test::assert_ok!(registry.lookup("add"));
    tokio_test::assert_err!(registry.lookup("multiply"));
}
