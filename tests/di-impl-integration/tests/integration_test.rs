//! Centralized integration tests for di-impl crate

use anyhow::Result;
use di_abstractions::{BeanFactory, ContainerConfig, DuplicateNamePolicy};
use di_common::BeanError;
use di_impl::{ApplicationContext, ContextSettings};
use std::io::Write;
use std::sync::Arc;

mod success {
    use bean_macros::Bean;
    use di_common::Autowired;

    pub trait CustomService: Send + Sync {
        fn describe(&self) -> String;
    }

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn CustomService))]
    pub struct MessageService;

    impl MessageService {
        pub fn get_message(&self) -> String {
            "Hello".to_string()
        }
    }

    impl CustomService for MessageService {
        fn describe(&self) -> String {
            format!("message: {}", self.get_message())
        }
    }

    #[derive(Debug, Default, Bean)]
    #[bean("printer-bean", provides(dyn CustomService))]
    pub struct PrinterService {
        #[autowire]
        message_service: Autowired<MessageService>,
    }

    impl PrinterService {
        pub fn print(&self) -> String {
            self.message_service.get_message()
        }

        pub fn message_service(&self) -> &Autowired<MessageService> {
            &self.message_service
        }
    }

    impl CustomService for PrinterService {
        fn describe(&self) -> String {
            format!("printer: {}", self.print())
        }
    }
}

mod nosuchbean {
    use super::success::MessageService;
    use bean_macros::Bean;
    use di_common::Autowired;

    #[derive(Debug, Default, Bean)]
    pub struct PrinterService {
        #[autowire]
        message_service: Autowired<MessageService>,
    }
}

mod nounique {
    use bean_macros::Bean;
    use di_common::Autowired;

    pub trait Transport: Send + Sync {}

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Transport))]
    pub struct HttpTransport;

    impl Transport for HttpTransport {}

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Transport))]
    pub struct GrpcTransport;

    impl Transport for GrpcTransport {}

    #[derive(Debug, Default, Bean)]
    pub struct Client {
        #[autowire]
        transport: Autowired<dyn Transport>,
    }
}

mod layered {
    use bean_macros::Bean;
    use di_common::Autowired;

    pub trait Repository: Send + Sync {
        fn find(&self, id: u32) -> Option<String>;
    }

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Repository))]
    pub struct MemoryRepository;

    impl Repository for MemoryRepository {
        fn find(&self, id: u32) -> Option<String> {
            (id == 7).then(|| "seven".to_string())
        }
    }

    #[derive(Debug, Default, Bean)]
    pub struct AuditLog;

    #[derive(Debug, Default, Bean)]
    pub struct UserService {
        #[autowire]
        repository: Autowired<dyn Repository>,
        #[autowire]
        audit: Autowired<AuditLog>,
    }

    impl UserService {
        pub fn name_of(&self, id: u32) -> Option<String> {
            self.repository.find(id)
        }

        pub fn audit(&self) -> &Autowired<AuditLog> {
            &self.audit
        }
    }

    pub mod web {
        use super::UserService;
        use bean_macros::Bean;
        use di_common::Autowired;

        #[derive(Debug, Default, Bean)]
        pub struct UserController {
            #[autowire]
            users: Autowired<UserService>,
        }

        impl UserController {
            pub fn show(&self, id: u32) -> String {
                self.users.name_of(id).unwrap_or_else(|| "unknown".to_string())
            }
        }
    }
}

mod duplicates {
    use bean_macros::Bean;

    #[derive(Debug, Default, Bean)]
    #[bean("shared")]
    pub struct FirstShared;

    #[derive(Debug, Default, Bean)]
    #[bean("shared")]
    pub struct SecondShared;
}

mod failing {
    use bean_macros::Bean;
    use di_common::BoxError;

    #[derive(Debug, Bean)]
    #[bean(constructor = Database::connect)]
    pub struct Database;

    impl Database {
        fn connect() -> Result<Self, BoxError> {
            Err("connection refused".into())
        }
    }
}

mod implicit {
    use bean_macros::Bean;
    use di_common::Autowired;

    #[derive(Debug, Default, Bean)]
    pub struct Clock;

    impl Clock {
        pub fn now(&self) -> u64 {
            42
        }
    }

    #[derive(Debug, Default, Bean)]
    pub struct Scheduler {
        pub clock: Autowired<Clock>,
    }
}

mod markers {
    use bean_macros::Bean;
    use di_common::Autowired;

    pub trait Codec: Send + Sync {
        fn encode(&self, value: &str) -> String;
    }

    #[derive(Debug, Default, Bean)]
    #[bean(provides(dyn Codec))]
    pub struct HexCodec;

    impl Codec for HexCodec {
        fn encode(&self, value: &str) -> String {
            value.bytes().map(|b| format!("{:02x}", b)).collect()
        }
    }

    #[derive(Debug, Default, Bean)]
    pub struct Encoder {
        #[autowire]
        pub bounded: Autowired<dyn Codec + Send + Sync>,
        #[autowire]
        pub plain: Autowired<dyn Codec>,
    }
}

mod empty {}

/// 非 Bean 类型
#[derive(Debug)]
struct Unrelated;

fn scope(name: &str) -> String {
    format!("{}::{}", module_path!(), name)
}

fn success_context() -> ApplicationContext {
    ApplicationContext::new(scope("success")).expect("success scope builds")
}

#[test]
fn test_get_bean_by_type() -> Result<()> {
    let context = success_context();

    let message_service = context.get_bean::<success::MessageService>()?;
    assert_eq!(message_service.get_message(), "Hello");
    Ok(())
}

#[test]
fn test_get_bean_by_type_without_candidates() {
    let context = success_context();

    let err = context.get_bean::<Unrelated>().unwrap_err();
    assert!(err.is_no_such_bean());
}

#[test]
fn test_get_bean_by_type_with_several_candidates() {
    let context = success_context();

    match context.get_bean::<dyn success::CustomService>() {
        Err(BeanError::NoUniqueBean { candidates, .. }) => {
            assert_eq!(candidates, vec!["messageService", "printer-bean"]);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("dyn CustomService should not be unique"),
    }
}

#[test]
fn test_get_bean_by_name() -> Result<()> {
    let context = success_context();

    let message_service = context.get_bean_by_name::<success::MessageService>("messageService")?;
    assert_eq!(message_service.get_message(), "Hello");

    let printer = context.get_bean_by_name::<success::PrinterService>("printer-bean")?;
    assert_eq!(printer.print(), "Hello");
    Ok(())
}

#[test]
fn test_get_bean_by_name_and_supertype() -> Result<()> {
    let context = success_context();

    let custom = context.get_bean_by_name::<dyn success::CustomService>("messageService")?;
    assert_eq!(custom.describe(), "message: Hello");
    Ok(())
}

#[test]
fn test_get_bean_by_missing_name() {
    let context = success_context();

    assert!(context
        .get_bean_by_name::<dyn success::CustomService>("customService")
        .is_err_and(|e| e.is_no_such_bean()));
    assert!(context
        .get_bean_by_name::<dyn success::CustomService>("nonexistent-name")
        .is_err_and(|e| e.is_no_such_bean()));
}

#[test]
fn test_get_bean_by_name_with_wrong_type() {
    let context = success_context();

    assert!(matches!(
        context.get_bean_by_name::<success::MessageService>("printer-bean"),
        Err(BeanError::BeanNotOfRequiredType { ref name, .. }) if name == "printer-bean"
    ));
}

#[test]
fn test_get_all_beans() {
    let context = success_context();

    let custom_services = context.get_all_beans::<dyn success::CustomService>();
    assert_eq!(custom_services.len(), 2);

    let mut descriptions: Vec<String> = custom_services
        .values()
        .map(|service| service.describe())
        .collect();
    descriptions.sort();
    assert_eq!(descriptions, vec!["message: Hello", "printer: Hello"]);
    assert!(custom_services.contains_key("messageService"));
    assert!(custom_services.contains_key("printer-bean"));

    assert!(context.get_all_beans::<Unrelated>().is_empty());
}

#[test]
fn test_autowired_field_is_set() -> Result<()> {
    let context = success_context();

    let printer = context.get_bean::<success::PrinterService>()?;
    let message_service = context.get_bean::<success::MessageService>()?;
    assert_eq!(printer.print(), message_service.get_message());

    let wired = printer.message_service().get().expect("slot wired");
    assert!(Arc::ptr_eq(wired, &message_service));
    Ok(())
}

#[test]
fn test_autowiring_without_candidate_fails_construction() {
    let err = ApplicationContext::new(scope("nosuchbean")).unwrap_err();
    assert!(err.is_no_such_bean());
}

#[test]
fn test_autowiring_with_several_candidates_fails_construction() {
    let err = ApplicationContext::new(scope("nounique")).unwrap_err();
    assert!(err.is_no_unique_bean());
}

#[test]
fn test_nested_modules_and_trait_slots() -> Result<()> {
    let context = ApplicationContext::new(scope("layered"))?;

    assert_eq!(
        context.bean_names(),
        vec!["auditLog", "memoryRepository", "userController", "userService"]
    );
    assert_eq!(context.wired_slots(), 3);

    let controller = context.get_bean::<layered::web::UserController>()?;
    assert_eq!(controller.show(7), "seven");
    assert_eq!(controller.show(8), "unknown");

    let users = context.get_bean::<layered::UserService>()?;
    assert!(users.audit().get().is_some());
    Ok(())
}

#[test]
fn test_autowired_field_without_attribute_is_wired() -> Result<()> {
    let context = ApplicationContext::new(scope("implicit"))?;
    assert_eq!(context.wired_slots(), 1);

    let scheduler = context.get_bean::<implicit::Scheduler>()?;
    let clock = context.get_bean::<implicit::Clock>()?;
    assert!(Arc::ptr_eq(scheduler.clock.get().expect("slot wired"), &clock));
    assert_eq!(scheduler.clock.now(), 42);
    Ok(())
}

#[test]
fn test_trait_slots_accept_marker_bounds() -> Result<()> {
    let context = ApplicationContext::new(scope("markers"))?;
    assert_eq!(context.wired_slots(), 2);

    let encoder = context.get_bean::<markers::Encoder>()?;
    assert_eq!(encoder.bounded.encode("ok"), "6f6b");
    assert_eq!(encoder.plain.encode("ok"), "6f6b");

    let bounded = context.get_bean::<dyn markers::Codec + Send + Sync>()?;
    let plain = context.get_bean::<dyn markers::Codec>()?;
    assert_eq!(
        Arc::as_ptr(&bounded).cast::<()>(),
        Arc::as_ptr(&plain).cast::<()>()
    );
    assert_eq!(context.get_all_beans::<dyn markers::Codec + Send + Sync>().len(), 1);
    Ok(())
}

#[test]
fn test_overlapping_scopes_are_scanned_once() -> Result<()> {
    let context = ApplicationContext::builder()
        .scan(scope("layered"))
        .scan(scope("layered::web"))
        .build()?;

    assert_eq!(context.bean_count(), 4);
    Ok(())
}

#[test]
fn test_duplicate_names() -> Result<()> {
    let context = ApplicationContext::new(scope("duplicates"))?;
    assert_eq!(context.bean_count(), 1);
    assert!(context.contains_bean("shared"));

    let result = ApplicationContext::builder()
        .scan(scope("duplicates"))
        .config(ContainerConfig {
            duplicate_names: DuplicateNamePolicy::Reject,
            ..ContainerConfig::default()
        })
        .build();
    assert!(matches!(result, Err(BeanError::DuplicateBean { ref name }) if name == "shared"));
    Ok(())
}

#[test]
fn test_constructor_failure_fails_construction() {
    match ApplicationContext::new(scope("failing")) {
        Err(BeanError::InstantiationFailed { bean, source, .. }) => {
            assert_eq!(bean, "database");
            assert_eq!(source.to_string(), "connection refused");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("construction should fail"),
    }
}

#[test]
fn test_empty_and_invalid_scopes() -> Result<()> {
    let context = ApplicationContext::new(scope("empty"))?;
    assert_eq!(context.bean_count(), 0);

    let result = ApplicationContext::builder()
        .scan(scope("empty"))
        .config(ContainerConfig::strict())
        .build();
    assert!(matches!(result, Err(BeanError::EmptyScan { .. })));

    assert!(matches!(
        ApplicationContext::new("   "),
        Err(BeanError::InvalidScope { .. })
    ));
    Ok(())
}

#[test]
fn test_settings_file_configures_context() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[container]\nduplicate_names = \"reject\"")?;

    let settings = ContextSettings::from_file(file.path())?;
    let result = ApplicationContext::builder()
        .scan(scope("duplicates"))
        .settings(&settings)
        .build();
    assert!(result.is_err_and(|e| matches!(e, BeanError::DuplicateBean { .. })));
    Ok(())
}

#[test]
fn test_concurrent_lookups() {
    let context = success_context();
    let expected = context
        .get_bean::<success::MessageService>()
        .expect("message service");

    std::thread::scope(|threads| {
        for _ in 0..8 {
            let context = context.clone();
            let expected = Arc::clone(&expected);
            threads.spawn(move || {
                for _ in 0..200 {
                    let found = context
                        .get_bean::<success::MessageService>()
                        .expect("lookup from worker thread");
                    assert!(Arc::ptr_eq(&found, &expected));
                    assert_eq!(context.get_all_beans::<dyn success::CustomService>().len(), 2);
                    assert!(context.get_bean::<dyn success::CustomService>().is_err());
                }
            });
        }
    });
}
