use ua_compose::{Product, ProcessEnv, ProductList, UaError, UserAgent};

fn base() -> ProductList {
    ProductList::new(vec![Product::new("MyTool", "1.0.0", "")])
}

#[test]
fn test_user_agent_string_env() {
    // Each test owns its variable so parallel tests don't interfere
    let var = "UA_COMPOSE_IT_APPEND_ENV";
    let expected_base = "MyTool/1.0.0";
    let user_agent = UserAgent::with_override_var(base(), ProcessEnv, var);

    let cases = [
        (expected_base.to_string(), None),
        (expected_base.to_string(), Some("")),
        (expected_base.to_string(), Some(" ")),
        (expected_base.to_string(), Some(" \n")),
        (format!("{} test/1", expected_base), Some("test/1")),
        (format!("{} test/2", expected_base), Some("test/2 ")),
        (format!("{} test/3", expected_base), Some(" test/3 ")),
        (format!("{} test/4", expected_base), Some("test/4 \n")),
    ];

    for (i, (expected, additional)) in cases.iter().enumerate() {
        match additional {
            Some(value) => std::env::set_var(var, value),
            None => std::env::remove_var(var),
        }

        let actual = user_agent.user_agent_string().unwrap();
        assert_eq!(&actual, expected, "case {}", i);
    }

    std::env::remove_var(var);
    assert_eq!(user_agent.base(), &base());
}

#[test]
fn test_user_agent_append_via_env_var() {
    let var = "UA_COMPOSE_IT_APPEND_COMPOSE";

    let cases = vec![
        (ProductList::default(), "", ProductList::default()),
        (ProductList::default(), " ", ProductList::default()),
        (ProductList::default(), " \n", ProductList::default()),
        (
            ProductList::new(vec![Product::new("Foo", "1.0", "")]),
            "test/1",
            ProductList::new(vec![
                Product::new("Foo", "1.0", ""),
                Product::new("test", "1", ""),
            ]),
        ),
        (
            ProductList::default(),
            "test/1 (comment)",
            ProductList::new(vec![Product::new("test", "1", "comment")]),
        ),
    ];

    for (i, (base, env_value, expected)) in cases.into_iter().enumerate() {
        std::env::set_var(var, env_value);
        let user_agent = UserAgent::with_override_var(base, ProcessEnv, var);
        let given = user_agent.products().unwrap();
        assert!(given.equal(&expected), "case {}: {} != {}", i, given, expected);
    }

    std::env::remove_var(var);
}

#[test]
fn test_malformed_env_var_is_an_error() {
    let var = "UA_COMPOSE_IT_APPEND_MALFORMED";
    std::env::set_var(var, "MissingVersion");

    let user_agent = UserAgent::with_override_var(base(), ProcessEnv, var);
    let err = user_agent.user_agent_string().unwrap_err();
    std::env::remove_var(var);

    match err {
        UaError::Override { var: name, source } => {
            assert_eq!(name, var);
            assert_eq!(source.token(), "MissingVersion");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_non_utf8_env_var_is_an_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let var = "UA_COMPOSE_IT_APPEND_NON_UTF8";
    std::env::set_var(var, OsString::from_vec(b"t/\xff".to_vec()));

    let user_agent = UserAgent::with_override_var(
        ProductList::new(vec![Product::new("Foo", "1.0", "")]),
        ProcessEnv,
        var,
    );
    let result = user_agent.user_agent_string();
    std::env::remove_var(var);

    match result {
        Err(UaError::UnreadableOverride { var: name }) => assert_eq!(name, var),
        other => panic!("unexpected result: {:?}", other),
    }
}
