//! End-to-end use of the process-wide registry through the public API.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sdi_inject::{Binding, HostManaged, HostObject, LazyHandle, Lifeline, TypeKey};
use serial_test::serial;

trait Logger: Send + Sync {
	fn log(&self, line: &str);
	fn lines(&self) -> Vec<String>;
}

#[derive(Default)]
struct MemoryLogger {
	lines: Mutex<Vec<String>>,
}

impl Logger for MemoryLogger {
	fn log(&self, line: &str) {
		self.lines.lock().unwrap().push(line.to_owned());
	}

	fn lines(&self) -> Vec<String> {
		self.lines.lock().unwrap().clone()
	}
}

fn setup() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	sdi_inject::clear();
}

#[test]
#[serial]
fn test_bind_get_and_remove_logger() {
	setup();
	let logger: Arc<dyn Logger> = Arc::new(MemoryLogger::default());
	sdi_inject::add(Binding::of(None, Arc::clone(&logger)));

	let resolved = sdi_inject::get::<dyn Logger>(None).unwrap().unwrap();
	assert!(Arc::ptr_eq(&resolved, &logger));

	sdi_inject::remove_key(TypeKey::of::<dyn Logger>(), None);
	assert!(sdi_inject::get::<dyn Logger>(None).unwrap().is_none());
	assert!(sdi_inject::global().is_empty());
}

#[test]
#[serial]
fn test_handle_fields_resolve_from_global() {
	setup();

	struct Service {
		logger: LazyHandle<dyn Logger>,
		audit: LazyHandle<dyn Logger>,
	}

	let mut service = Service {
		logger: LazyHandle::new(),
		audit: LazyHandle::aliased("audit"),
	};
	assert!(service.logger.get().unwrap().is_none());

	let main: Arc<dyn Logger> = Arc::new(MemoryLogger::default());
	let audit: Arc<dyn Logger> = Arc::new(MemoryLogger::default());
	sdi_inject::add(Binding::of(None, Arc::clone(&main)));
	sdi_inject::add(Binding::of(Some("audit"), Arc::clone(&audit)));

	service.logger.get().unwrap().unwrap().log("started");
	service.audit.get().unwrap().unwrap().log("login");

	assert_eq!(main.lines(), vec!["started".to_string()]);
	assert_eq!(audit.lines(), vec!["login".to_string()]);
	sdi_inject::clear();
}

#[test]
#[serial]
fn test_host_destroys_bound_object() {
	setup();

	struct Scene {
		generation: u32,
		lifeline: Lifeline,
	}

	impl HostObject for Scene {
		fn is_alive(&self) -> bool {
			self.lifeline.is_alive()
		}
	}

	let first = Lifeline::new();
	sdi_inject::add(Binding::of(
		None,
		Arc::new(Scene {
			generation: 1,
			lifeline: first.clone(),
		}),
	));

	let mut scene = LazyHandle::<Scene, HostManaged>::default();
	assert_eq!(scene.get().unwrap().unwrap().generation, 1);

	first.destroy();
	sdi_inject::add(Binding::of(
		None,
		Arc::new(Scene {
			generation: 2,
			lifeline: Lifeline::new(),
		}),
	));

	assert_eq!(scene.get().unwrap().unwrap().generation, 2);
	sdi_inject::clear();
}
