//! Common test utilities
//!
//! This module provides shared fixtures for the integration tests: a mock
//! application wired into [`CoreServices`] and a login page to act on.

#![allow(dead_code)]

use chaser_elements::config::JsonSettingsFile;
use chaser_elements::driver::{Locator, MockApplication, MockRemoteElement, MockWebDriver};
use chaser_elements::CoreServices;
use std::sync::Arc;

/// Services around a mock driver
pub struct TestApp {
    pub driver: Arc<MockWebDriver>,
    pub application: Arc<MockApplication>,
    pub services: CoreServices,
}

/// Settings with short timeouts so waits stay cheap
pub fn settings_json(cache_enabled: bool, retry_number: u32) -> String {
    format!(
        r#"{{
            "timeouts": {{
                "timeoutImplicit": 1,
                "timeoutCondition": 2,
                "timeoutPollingInterval": 100,
                "timeoutCommand": 60
            }},
            "retry": {{ "number": {}, "pollingInterval": 300 }},
            "logger": {{ "language": "en", "logPageSource": true }},
            "elementCache": {{ "isEnabled": {} }}
        }}"#,
        retry_number, cache_enabled
    )
}

/// Create an application with an empty page
pub fn create_app(cache_enabled: bool) -> TestApp {
    let settings = JsonSettingsFile::from_json("integration test", &settings_json(cache_enabled, 2))
        .expect("Failed to parse settings");
    create_app_with(settings)
}

pub fn create_app_with(settings: JsonSettingsFile) -> TestApp {
    let driver = Arc::new(MockWebDriver::new());
    let application = Arc::new(MockApplication::new(driver.clone()));
    let services =
        CoreServices::new(settings, application.clone()).expect("Failed to create core services");

    TestApp {
        driver,
        application,
        services,
    }
}

pub fn login_field() -> Locator {
    Locator::id("login")
}

pub fn password_field() -> Locator {
    Locator::id("password")
}

pub fn submit_button() -> Locator {
    Locator::xpath("//button[@type='submit']")
}

pub fn greeting() -> Locator {
    Locator::css("#greeting")
}

/// Elements of a login page
pub struct LoginPage {
    pub login: Arc<MockRemoteElement>,
    pub password: Arc<MockRemoteElement>,
    pub submit: Arc<MockRemoteElement>,
    pub greeting: Arc<MockRemoteElement>,
}

/// Put a login page on the mock driver; the greeting starts hidden
pub async fn setup_login_page(driver: &MockWebDriver) -> LoginPage {
    let page = LoginPage {
        login: Arc::new(MockRemoteElement::new()),
        password: Arc::new(MockRemoteElement::new()),
        submit: Arc::new(MockRemoteElement::new().with_text("Sign in")),
        greeting: Arc::new(MockRemoteElement::new().with_text("Welcome!").hidden()),
    };

    driver.add_element(&login_field(), page.login.clone()).await;
    driver.add_element(&password_field(), page.password.clone()).await;
    driver.add_element(&submit_button(), page.submit.clone()).await;
    driver.add_element(&greeting(), page.greeting.clone()).await;
    driver
        .set_page_source(Some("<html><body><form id='login-form'></form></body></html>".to_string()))
        .await;

    page
}
