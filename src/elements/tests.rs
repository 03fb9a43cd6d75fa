//! Element model unit tests

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use super::*;
use crate::config::JsonSettingsFile;
use crate::driver::{Locator, MockApplication, MockRemoteElement, MockWebDriver, RemoteElement};
use crate::{CoreServices, Error, ErrorKind};

struct Fixture {
    driver: Arc<MockWebDriver>,
    services: CoreServices,
}

fn fixture(cache_enabled: bool) -> Fixture {
    let json = format!(
        r#"{{
            "timeouts": {{
                "timeoutImplicit": 2,
                "timeoutCondition": 1,
                "timeoutPollingInterval": 100,
                "timeoutCommand": 60
            }},
            "retry": {{ "number": 2, "pollingInterval": 100 }},
            "logger": {{ "language": "en", "logPageSource": true }},
            "elementCache": {{ "isEnabled": {} }}
        }}"#,
        cache_enabled
    );
    let settings = JsonSettingsFile::from_json("elements test", &json).expect("Failed to parse settings");
    let driver = Arc::new(MockWebDriver::new());
    let application = Arc::new(MockApplication::new(driver.clone()));
    let services = CoreServices::new(settings, application).expect("Failed to create services");
    Fixture { driver, services }
}

fn submit() -> Locator {
    Locator::xpath("//button[@id='submit']")
}

async fn add(driver: &MockWebDriver, element: MockRemoteElement) -> Arc<MockRemoteElement> {
    let element = Arc::new(element);
    driver.add_element(&submit(), element.clone()).await;
    element
}

// Finder

#[tokio::test(start_paused = true)]
async fn test_find_element_skips_hidden_elements() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().hidden()).await;
    let visible = add(&f.driver, MockRemoteElement::new()).await;

    let found = f
        .services
        .element_finder()
        .find_element(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();

    assert_eq!(found.id(), visible.id());
}

#[tokio::test(start_paused = true)]
async fn test_find_elements_without_match_and_zero_timeout_is_empty() {
    let f = fixture(false);
    let start = Instant::now();

    let found = f
        .services
        .element_finder()
        .find_elements(&submit(), ElementState::Displayed, Some(Duration::ZERO))
        .await
        .unwrap();

    assert!(found.is_empty());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_find_element_without_match_and_zero_timeout_is_not_found() {
    let f = fixture(false);

    let err = f
        .services
        .element_finder()
        .find_element(&submit(), ElementState::Displayed, Some(Duration::ZERO))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_find_element_in_wrong_state_times_out() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().hidden()).await;

    let err = f
        .services
        .element_finder()
        .find_element(&submit(), ElementState::Displayed, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.to_string().contains("were found in displayed state"));
}

#[tokio::test(start_paused = true)]
async fn test_find_elements_in_wrong_state_is_empty() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().hidden()).await;

    let found = f
        .services
        .element_finder()
        .find_elements(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_caught_timeout_on_empty_page_can_raise_not_found() {
    let f = fixture(false);
    let desired = DesiredState::from(ElementState::Displayed)
        .catching_timeout(true)
        .raising_not_found(true);

    let err = f
        .services
        .element_finder()
        .find_elements_in_state(&submit(), desired, Some(Duration::ZERO))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_find_element_then_find_elements_agree() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new()).await;
    let finder = f.services.element_finder();

    let single = finder
        .find_element(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();
    let all = finder
        .find_elements(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), single.id());
}

#[tokio::test(start_paused = true)]
async fn test_find_element_waits_for_element_to_appear() {
    let f = fixture(false);
    let driver = f.driver.clone();
    let element = Arc::new(MockRemoteElement::new());
    let late = element.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(350)).await;
        driver.add_element(&submit(), late).await;
    });

    let found = f
        .services
        .element_finder()
        .find_element(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();

    assert_eq!(found.id(), element.id());
    assert!(f.driver.find_calls() >= 4);
}

#[tokio::test(start_paused = true)]
async fn test_finder_restores_implicit_wait() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new()).await;

    f.services
        .element_finder()
        .find_element(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();

    assert_eq!(
        f.driver.implicit_wait_history().await,
        vec![Duration::ZERO, Duration::from_secs(2)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_finder_ignores_stale_elements_while_filtering() {
    let f = fixture(false);
    let element = add(&f.driver, MockRemoteElement::new()).await;
    element.make_stale();

    let found = f
        .services
        .element_finder()
        .find_elements(&submit(), ElementState::Displayed, None)
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_finder_propagates_driver_errors() {
    let f = fixture(false);
    f.driver.fail_next_find(Error::driver("session deleted")).await;

    let err = f
        .services
        .element_finder()
        .find_elements(&submit(), ElementState::Displayed, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Driver);
    assert_eq!(
        f.driver.implicit_wait_history().await,
        vec![Duration::ZERO, Duration::from_secs(2)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_lookup_restores_implicit_wait() {
    let f = fixture(false);
    let finder = f.services.element_finder();

    let abandoned = tokio::time::timeout(
        Duration::from_millis(500),
        finder.find_element(&submit(), ElementState::Displayed, Some(Duration::from_secs(5))),
    )
    .await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(
        f.driver.implicit_wait_history().await,
        vec![Duration::ZERO, Duration::from_secs(2)]
    );
}

// Cache

fn cache_handler(f: &Fixture) -> ElementCacheHandler {
    ElementCacheHandler::new(
        submit(),
        ElementState::Displayed,
        f.services.element_finder(),
        f.services.localized_logger(),
    )
}

#[tokio::test]
async fn test_fresh_cache_needs_refresh_but_is_not_stale() {
    let f = fixture(true);
    let handler = cache_handler(&f);

    assert!(handler.is_refresh_needed(None).await.unwrap());
    assert!(handler.is_refresh_needed(Some(ElementState::ExistsInAnyState)).await.unwrap());
    assert!(!handler.is_stale().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_cached_element_is_reused() {
    let f = fixture(true);
    add(&f.driver, MockRemoteElement::new()).await;
    let handler = cache_handler(&f);

    let first = handler.get_element(None, None).await.unwrap();
    let calls = f.driver.find_calls();
    let second = handler.get_element(None, None).await.unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(f.driver.find_calls(), calls);
    assert!(!handler.is_stale().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_stale_cached_element_is_refreshed() {
    let f = fixture(true);
    let detached = add(&f.driver, MockRemoteElement::new()).await;
    let handler = cache_handler(&f);
    handler.get_element(None, None).await.unwrap();

    detached.make_stale();
    let replacement = Arc::new(MockRemoteElement::new());
    f.driver.set_elements(&submit(), vec![replacement.clone()]).await;

    assert!(handler.is_stale().await.unwrap());
    let refreshed = handler.get_element(None, None).await.unwrap();
    assert_eq!(refreshed.id(), replacement.id());
    assert!(!handler.is_stale().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_hidden_cached_element_needs_refresh_only_when_displayed_is_expected() {
    let f = fixture(true);
    add(&f.driver, MockRemoteElement::new().hidden()).await;
    let handler = cache_handler(&f);

    handler
        .get_element(None, Some(ElementState::ExistsInAnyState))
        .await
        .unwrap();

    assert!(!handler
        .is_refresh_needed(Some(ElementState::ExistsInAnyState))
        .await
        .unwrap());
    assert!(handler.is_refresh_needed(None).await.unwrap());
    assert!(handler.is_stale().await.unwrap());
}

// State providers

#[tokio::test(start_paused = true)]
async fn test_live_state_queries() {
    let f = fixture(false);
    let element = add(&f.driver, MockRemoteElement::new().hidden()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    assert!(!button.state().is_displayed().await.unwrap());
    assert!(button.state().is_exist().await.unwrap());

    element.set_displayed(true);
    assert!(button.state().is_displayed().await.unwrap());
    assert!(button.state().is_enabled().await.unwrap());
    assert!(button.state().is_clickable().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_live_enabled_check_honours_disabled_class() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().with_attribute("class", "btn disabled")).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    assert!(!button.state().is_enabled().await.unwrap());
    assert!(button.state().wait_for_not_enabled(None).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_live_enabled_check_on_absent_element_is_not_found() {
    let f = fixture(false);
    let button = f.services.element_factory().get_button(submit(), "Submit");

    let err = button.state().wait_for_enabled(None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_live_wait_for_clickable_times_out_on_disabled_element() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().disabled()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    assert!(!button.state().is_clickable().await.unwrap());
    let err = button.state().wait_for_clickable(None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
}

#[tokio::test(start_paused = true)]
async fn test_live_wait_for_not_exist_after_removal() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");
    let driver = f.driver.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        driver.remove_elements(&submit()).await;
    });

    assert!(button.state().wait_for_not_exist(None).await.unwrap());
    assert!(!button.state().is_exist().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_live_wait_for_displayed_gives_up_after_timeout() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().hidden()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");
    let start = Instant::now();

    assert!(!button
        .state()
        .wait_for_displayed(Some(Duration::from_millis(500)))
        .await
        .unwrap());
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert!(button.state().wait_for_not_displayed(None).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_cached_state_of_absent_element_is_false() {
    let f = fixture(true);
    let button = f.services.element_factory().get_button(submit(), "Submit");

    assert!(!button.state().is_displayed().await.unwrap());
    assert!(!button.state().is_exist().await.unwrap());
    assert!(!button.state().is_clickable().await.unwrap());
    assert!(!button.state().wait_for_displayed(Some(Duration::from_millis(300))).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_cached_is_enabled_of_absent_element_is_not_found() {
    let f = fixture(true);
    let button = f.services.element_factory().get_button(submit(), "Submit");

    let err = button.state().is_enabled().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_cached_state_follows_element() {
    let f = fixture(true);
    let element = add(&f.driver, MockRemoteElement::new()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    assert!(button.state().is_displayed().await.unwrap());
    assert!(button.state().is_enabled().await.unwrap());
    assert!(button.state().is_clickable().await.unwrap());

    element.set_enabled(false);
    assert!(!button.state().is_enabled().await.unwrap());
    assert!(button.state().wait_for_not_enabled(None).await.unwrap());

    element.make_stale();
    assert!(!button.state().is_displayed().await.unwrap());
    assert!(!button.state().is_enabled().await.unwrap());

    f.driver.remove_elements(&submit()).await;
    assert!(!button.state().is_displayed().await.unwrap());
    assert!(!button.state().is_exist().await.unwrap());

    let replacement = Arc::new(MockRemoteElement::new());
    f.driver.set_elements(&submit(), vec![replacement.clone()]).await;
    assert!(button.state().is_displayed().await.unwrap());
    assert!(button.state().is_exist().await.unwrap());
    assert!(button.state().is_enabled().await.unwrap());
    assert_eq!(button.cache().get_element(None, None).await.unwrap().id(), replacement.id());
}

#[tokio::test(start_paused = true)]
async fn test_cached_state_sees_rerendered_element() {
    let f = fixture(true);
    let detached = add(&f.driver, MockRemoteElement::new()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");
    button.click().await.unwrap();

    detached.make_stale();
    let replacement = Arc::new(MockRemoteElement::new());
    f.driver.set_elements(&submit(), vec![replacement.clone()]).await;
    let start = Instant::now();

    assert!(button.state().wait_for_displayed(None).await.unwrap());
    assert!(button.state().wait_for_exist(None).await.unwrap());
    assert!(button.state().is_displayed().await.unwrap());
    assert!(button.state().is_exist().await.unwrap());
    assert!(button.state().is_clickable().await.unwrap());
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert!(replacement.displayed_checks() > 0);
}

#[tokio::test(start_paused = true)]
async fn test_cached_wait_for_clickable_raises_timeout() {
    let f = fixture(true);
    add(&f.driver, MockRemoteElement::new().disabled()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    let err = button.state().wait_for_clickable(None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.to_string().contains("was not clickable"));
}

// Element

#[tokio::test(start_paused = true)]
async fn test_click_retries_stale_reference() {
    let f = fixture(false);
    let element = add(&f.driver, MockRemoteElement::new()).await;
    element.fail_next_action(Error::stale_reference("detached")).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    button.click().await.unwrap();

    assert_eq!(element.clicks(), 1);
    assert_eq!(element.action_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_click_gives_up_after_retries() {
    let f = fixture(false);
    let element = add(&f.driver, MockRemoteElement::new()).await;
    for _ in 0..3 {
        element
            .fail_next_action(Error::invalid_element_state("overlapped"))
            .await;
    }
    let button = f.services.element_factory().get_button(submit(), "Submit");

    let err = button.click().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidElementState);
    assert_eq!(element.action_calls(), 3);
    assert_eq!(element.clicks(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_element_reads_and_types() {
    let f = fixture(false);
    let element = add(
        &f.driver,
        MockRemoteElement::new()
            .with_text("Login")
            .with_attribute("value", "admin"),
    )
    .await;
    let factory = f.services.element_factory();

    let text_box = factory.get_text_box(submit(), "Login");
    text_box.type_text("secret").await.unwrap();
    assert_eq!(element.sent_keys().await, vec!["secret".to_string()]);
    assert_eq!(text_box.value().await.unwrap(), "admin");
    assert_eq!(text_box.get_attribute("missing").await.unwrap(), None);

    let label = factory.get_label(submit(), "Title");
    assert_eq!(label.text().await.unwrap(), "Login");
    assert_eq!(label.element_type(), "Label");
    assert_eq!(text_box.element_type(), "TextBox");
}

#[tokio::test(start_paused = true)]
async fn test_absent_element_is_not_found_even_if_page_source_fails() {
    let f = fixture(false);
    f.driver.set_page_source(None).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    let err = button.click().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_cached_element_skips_lookup_on_next_action() {
    let f = fixture(true);
    let element = add(&f.driver, MockRemoteElement::new()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");

    button.click().await.unwrap();
    let calls = f.driver.find_calls();
    button.click().await.unwrap();

    assert_eq!(f.driver.find_calls(), calls);
    assert_eq!(element.clicks(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cached_element_is_found_again_once_stale() {
    let f = fixture(true);
    let detached = add(&f.driver, MockRemoteElement::new()).await;
    let button = f.services.element_factory().get_button(submit(), "Submit");
    button.click().await.unwrap();

    detached.make_stale();
    let replacement = Arc::new(MockRemoteElement::new());
    f.driver.set_elements(&submit(), vec![replacement.clone()]).await;
    button.click().await.unwrap();

    assert_eq!(detached.clicks(), 1);
    assert_eq!(replacement.clicks(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_custom_element_keeps_its_state() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new().hidden().with_text("hidden")).await;
    let element = f.services.element_factory().get_custom_element(
        submit(),
        "Hidden input",
        "Input",
        ElementState::ExistsInAnyState,
    );

    assert_eq!(element.element_state(), ElementState::ExistsInAnyState);
    assert_eq!(element.text().await.unwrap(), "hidden");
}

// Factory

#[tokio::test(start_paused = true)]
async fn test_factory_find_elements_by_count() {
    let f = fixture(false);
    let factory = f.services.element_factory();

    let none = factory
        .find_elements(&submit(), "Buttons", ElementsCount::Zero, ElementState::Displayed, None)
        .await
        .unwrap();
    assert!(none.is_empty());

    let err = factory
        .find_elements(&submit(), "Buttons", ElementsCount::MoreThanZero, ElementState::Displayed, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.to_string().contains("No elements with name 'Buttons' were found"));

    add(&f.driver, MockRemoteElement::new()).await;
    add(&f.driver, MockRemoteElement::new()).await;
    let any = factory
        .find_elements(&submit(), "Buttons", ElementsCount::Any, ElementState::Displayed, None)
        .await
        .unwrap();
    assert_eq!(any.len(), 2);

    let err = factory
        .find_elements(&submit(), "Buttons", ElementsCount::Zero, ElementState::Displayed, None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("were found, but should not"));
}

#[tokio::test(start_paused = true)]
async fn test_factory_waits_for_elements_to_disappear() {
    let f = fixture(false);
    add(&f.driver, MockRemoteElement::new()).await;
    let driver = f.driver.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        driver.remove_elements(&submit()).await;
    });

    let found = f
        .services
        .element_factory()
        .find_elements(&submit(), "Buttons", ElementsCount::Zero, ElementState::Displayed, None)
        .await
        .unwrap();
    assert!(found.is_empty());
}

// Child elements

fn menu() -> Locator {
    Locator::xpath("//ul[@id='menu']")
}

#[tokio::test(start_paused = true)]
async fn test_child_element_is_located_inside_parent() {
    let f = fixture(false);
    let field = Arc::new(MockRemoteElement::new().with_attribute("value", "admin"));
    f.driver
        .add_element(&Locator::xpath("//form[@id='login-form']//input[@name='login']"), field.clone())
        .await;
    let form = f.services.element_factory().get_custom_element(
        Locator::xpath("//form[@id='login-form']"),
        "Login form",
        "Form",
        ElementState::Displayed,
    );

    let login: TextBox = form
        .find_child_element(
            &Locator::xpath(".//input[@name='login']"),
            "Login",
            |locator, name, state, services| TextBox::new(locator, name, state, services),
            ElementState::Displayed,
        )
        .unwrap();

    assert_eq!(login.name(), "Login");
    assert_eq!(login.element_type(), "TextBox");
    login.type_text("secret").await.unwrap();
    assert_eq!(field.sent_keys().await, vec!["secret".to_string()]);
    assert_eq!(login.value().await.unwrap(), "admin");
}

#[tokio::test(start_paused = true)]
async fn test_child_elements_are_addressed_by_position() {
    let f = fixture(false);
    let items = Locator::xpath("//ul[@id='menu']//li");
    f.driver.add_element(&items, Arc::new(MockRemoteElement::new())).await;
    f.driver.add_element(&items, Arc::new(MockRemoteElement::new().hidden())).await;
    f.driver.add_element(&items, Arc::new(MockRemoteElement::new())).await;
    f.driver
        .add_element(
            &Locator::xpath("(//ul[@id='menu']//li)[1]"),
            Arc::new(MockRemoteElement::new().with_text("Home")),
        )
        .await;
    let menu = f.services.element_factory().get_label(menu(), "Menu");

    let labels: Vec<Label> = menu
        .find_child_elements(
            &Locator::xpath(".//li"),
            "Item",
            |locator, name, state, services| Label::new(locator, name, state, services),
            ElementsCount::MoreThanZero,
            ElementState::Displayed,
            None,
        )
        .await
        .unwrap();

    let names: Vec<&str> = labels.iter().map(|label| label.name()).collect();
    assert_eq!(names, vec!["Item 1", "Item 2"]);
    assert_eq!(labels[1].locator(), &Locator::xpath("(//ul[@id='menu']//li)[2]"));
    assert_eq!(labels[0].text().await.unwrap(), "Home");
}

#[tokio::test(start_paused = true)]
async fn test_child_elements_wait_for_expected_count() {
    let f = fixture(false);
    let menu = f.services.element_factory().get_label(menu(), "Menu");
    let actions = Locator::xpath(".//button");
    let supplier =
        |locator, name: String, state, services| Button::new(locator, name, state, services);

    let none: Vec<Button> = menu
        .find_child_elements(
            &actions,
            "Action",
            supplier,
            ElementsCount::Zero,
            ElementState::Displayed,
            None,
        )
        .await
        .unwrap();
    assert!(none.is_empty());

    let err = menu
        .find_child_elements(
            &actions,
            "Action",
            supplier,
            ElementsCount::MoreThanZero,
            ElementState::Displayed,
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
}

#[tokio::test]
async fn test_child_of_mismatched_locators_is_rejected() {
    let f = fixture(false);
    let menu = f
        .services
        .element_factory()
        .get_label(Locator::css("ul#menu"), "Menu");

    let err = menu
        .find_child_element(
            &Locator::xpath(".//li"),
            "Item",
            |locator, name, state, services| Label::new(locator, name, state, services),
            ElementState::Displayed,
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLocator);
}

// State descriptors

#[tokio::test]
async fn test_desired_state_flags_and_predicates() {
    let desired = DesiredState::enabled()
        .catching_timeout(true)
        .raising_not_found(true);
    assert_eq!(desired.name(), "enabled");
    assert!(desired.catch_timeout());
    assert!(desired.raise_not_found());

    let disabled: Arc<dyn RemoteElement> =
        Arc::new(MockRemoteElement::new().with_attribute("class", "disabled"));
    assert!(!desired.is_satisfied_by(disabled.clone()).await.unwrap());
    assert!(DesiredState::not_enabled().is_satisfied_by(disabled).await.unwrap());

    let hidden: Arc<dyn RemoteElement> = Arc::new(MockRemoteElement::new().hidden());
    assert!(!DesiredState::from(ElementState::Displayed).is_satisfied_by(hidden.clone()).await.unwrap());
    assert!(DesiredState::from(ElementState::ExistsInAnyState).is_satisfied_by(hidden).await.unwrap());
}
