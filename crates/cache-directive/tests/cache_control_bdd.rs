//! Behavioural tests for Cache-Control parsing.
//!
//! These scenarios cover the request and response assemblers end to end:
//! delta-seconds handling, directive shape errors, field-name lists, quoted
//! values, and extensions.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::BTreeSet;

use cache_directive::{
    CacheControlError, Directive, RequestCacheDirective, ResponseCacheDirective,
    parse_request_directive, parse_response_directive,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures
// ============================================================================

/// Test world holding the header value and the parse outcomes.
#[derive(Default, ScenarioState)]
struct World {
    value: Slot<String>,
    request: Slot<Result<RequestCacheDirective, CacheControlError>>,
    response: Slot<Result<ResponseCacheDirective, CacheControlError>>,
    second_response: Slot<Result<ResponseCacheDirective, CacheControlError>>,
}

impl World {
    fn value(&self) -> String {
        self.value.get().expect("header value should be set")
    }

    /// Returns whichever parse outcome was recorded, without its payload.
    fn outcome(&self) -> Result<(), CacheControlError> {
        if let Some(result) = self.request.get() {
            return result.map(drop);
        }
        self.response
            .get()
            .expect("a parse result should be set")
            .map(drop)
    }

    fn request(&self) -> RequestCacheDirective {
        self.request
            .get()
            .expect("request result should be set")
            .expect("request should parse")
    }

    fn response(&self) -> ResponseCacheDirective {
        self.response
            .get()
            .expect("response result should be set")
            .expect("response should parse")
    }

    fn error(&self) -> CacheControlError {
        self.outcome().expect_err("parsing should fail")
    }
}

fn name_list(list: &str) -> Vec<String> {
    list.split(", ").map(str::to_owned).collect()
}

fn name_set(list: &str) -> BTreeSet<String> {
    list.split(", ").map(str::to_owned).collect()
}

fn directive(name: &str) -> Directive {
    Directive::from_name(name).expect("step should name a known directive")
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the Cache-Control value {value}")]
fn the_cache_control_value(world: &World, value: String) {
    world.value.set(value);
}

// ============================================================================
// When steps
// ============================================================================

#[when("it is parsed as a request directive")]
fn it_is_parsed_as_a_request_directive(world: &World) {
    let value = world.value();
    world.request.set(parse_request_directive(&value));
}

#[when("it is parsed as a response directive")]
fn it_is_parsed_as_a_response_directive(world: &World) {
    let value = world.value();
    world.response.set(parse_response_directive(&value));
}

#[when("it is parsed as a response directive twice")]
fn it_is_parsed_as_a_response_directive_twice(world: &World) {
    let value = world.value();
    world.response.set(parse_response_directive(&value));
    world.second_response.set(parse_response_directive(&value));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let outcome = world.outcome();
    assert!(outcome.is_ok(), "Expected parsing to succeed: {outcome:?}");
}

#[then("the request max-age is {seconds}")]
fn the_request_max_age_is(world: &World, seconds: i32) {
    assert_eq!(world.request().max_age, seconds);
}

#[then("the request no-cache flag is set")]
fn the_request_no_cache_flag_is_set(world: &World) {
    assert!(world.request().no_cache);
}

#[then("the request extensions are {list}")]
fn the_request_extensions_are(world: &World, list: String) {
    assert_eq!(world.request().extensions, name_list(&list));
}

#[then("the private directive is present")]
fn the_private_directive_is_present(world: &World) {
    assert!(world.response().private_present);
}

#[then("the private field names are {list}")]
fn the_private_field_names_are(world: &World, list: String) {
    assert_eq!(world.response().private, name_set(&list));
}

#[then("no private field names are recorded")]
fn no_private_field_names_are_recorded(world: &World) {
    assert!(world.response().private.is_empty());
}

#[then("the no-cache field names are {list}")]
fn the_no_cache_field_names_are(world: &World, list: String) {
    let response = world.response();
    assert!(response.no_cache_present);
    assert_eq!(response.no_cache, name_set(&list));
}

#[then("parsing fails with a missing delta-seconds error for {name}")]
fn parsing_fails_with_a_missing_delta_seconds_error(world: &World, name: String) {
    assert_eq!(
        world.error(),
        CacheControlError::MissingDeltaSeconds {
            directive: directive(&name)
        }
    );
}

#[then("parsing fails because {name} does not accept a value")]
fn parsing_fails_because_directive_does_not_accept_a_value(world: &World, name: String) {
    assert_eq!(
        world.error(),
        CacheControlError::UnexpectedValue {
            directive: directive(&name)
        }
    );
}

#[then("parsing fails with a missing closing quote error")]
fn parsing_fails_with_a_missing_closing_quote_error(world: &World) {
    assert_eq!(world.error(), CacheControlError::MissingClosingQuote);
}

#[then("both results are identical")]
fn both_results_are_identical(world: &World) {
    let first = world.response.get().expect("first result should be set");
    let second = world
        .second_response
        .get()
        .expect("second result should be set");

    assert!(first.is_ok(), "Expected parsing to succeed: {first:?}");
    assert_eq!(first, second, "Parsing should be repeatable");
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Request max-age is read as delta-seconds"
)]
fn request_max_age_is_read_as_delta_seconds(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Oversized max-age saturates instead of failing"
)]
fn oversized_max_age_saturates_instead_of_failing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Bare request max-age is rejected"
)]
fn bare_request_max_age_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Request no-cache refuses a value"
)]
fn request_no_cache_refuses_a_value(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Bare request no-cache sets the flag"
)]
fn bare_request_no_cache_sets_the_flag(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Unknown request directives are kept as extensions"
)]
fn unknown_request_directives_are_kept_as_extensions(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Private field names are canonicalised"
)]
fn private_field_names_are_canonicalised(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Bare private records presence only"
)]
fn bare_private_records_presence_only(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Escaped quotes are unescaped in field names"
)]
fn escaped_quotes_are_unescaped_in_field_names(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Unterminated quote aborts the parse"
)]
fn unterminated_quote_aborts_the_parse(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/cache_control.feature",
    name = "Parsing the same value twice gives the same result"
)]
fn parsing_the_same_value_twice_gives_the_same_result(world: World) {
    let _ = world;
}
