//! Architecture contract tests.

mod support;

use support::architecture::{
    find_definitions_in_mod_files, find_lines_containing, find_lines_containing_except_files,
    path_exists, read_relative,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "zip::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_depends_on_ports_not_adapters() {
    let hits = find_lines_containing(
        "src/application",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::port::inbound",
            "reqwest::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found adapter imports in application layer: {hits:#?}"
    );
}

#[test]
fn credentials_only_travel_through_the_earthdata_session() {
    let hits = find_lines_containing_except_files(
        "src",
        &["AUTHORIZATION"],
        &["src/adapter/outbound/earthdata/session.rs"],
    );

    assert!(
        hits.is_empty(),
        "Authorization headers must only be attached by the Earthdata session: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_definitions_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found item definitions in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_dispatch_lives_outside_mod_rs() {
    assert!(path_exists("src/adapter/inbound/cli/dispatch.rs"));
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> Result<&'static dyn OperatorPort>"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn operator_port_composes_every_capability() {
    let source = read_relative("src/port/inbound/operator/port.rs");
    for capability in [
        "ConfigurationOperator",
        "DiagnosticOperator",
        "RuntimeOperator",
        "AcquisitionOperator",
    ] {
        assert!(
            source.contains(capability),
            "OperatorPort should include {capability}"
        );
    }
}
