// tests/run_missing_vars.rs

use std::sync::{Arc, Mutex};

use phaserun_test_utils::builders::{BuildContextBuilder, env_lookup};
use phaserun_test_utils::fake_executor::FakeExecutor;
use phaserun_test_utils::init_tracing;

use phaserun::config::loader::REQUIRED_VARS;

#[tokio::test]
async fn each_missing_variable_alone_exits_one_and_spawns_nothing() {
    init_tracing();
    let context = BuildContextBuilder::new().build();

    for hidden in REQUIRED_VARS {
        let executed = Arc::new(Mutex::new(Vec::new()));
        let mut executor = FakeExecutor::new(Arc::clone(&executed));

        let base = env_lookup(&context);
        let lookup = move |name: &str| if name == hidden { None } else { base(name) };

        let code = phaserun::run(lookup, &mut executor).await;

        assert_eq!(code, 1, "hiding {hidden} should exit 1");
        assert!(
            executed.lock().unwrap().is_empty(),
            "hiding {hidden} should not spawn anything"
        );
    }
}

#[tokio::test]
async fn empty_environment_exits_one_and_spawns_nothing() {
    init_tracing();
    let executed = Arc::new(Mutex::new(Vec::new()));
    let mut executor = FakeExecutor::new(Arc::clone(&executed));

    let code = phaserun::run(|_| None, &mut executor).await;

    assert_eq!(code, 1);
    assert!(executed.lock().unwrap().is_empty());
}
