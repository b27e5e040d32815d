use crate::cim::{CLASS_NAME_PROPERTY, CimError, InstanceRecord, NamePattern, ObjectHandle, PropertyRecord, RawValue, Result, Scalar, render};

/// Flatten one open instance into a handle-free record.
///
/// The class name is read first from the `__CLASS` system property and
/// fixed as the record's class name. Non-system properties are then
/// walked in discovery order; a property is kept when its name fully
/// matches `property_filter`, otherwise its value is dropped without
/// rendering. Any foreign-call failure propagates unhandled: one bad
/// property aborts the whole enumeration.
pub fn collect_instance<H: ObjectHandle>(handle: &mut H, property_filter: &NamePattern) -> Result<InstanceRecord> {
	let class_name = read_class_name(&*handle)?;

	handle.begin_property_enumeration()?;

	let mut properties = Vec::new();
	while let Some((name, value)) = handle.next_property()? {
		if !property_filter.matches(&name) {
			continue;
		}
		let value = render(value)?;
		properties.push(PropertyRecord { name, value });
	}

	Ok(InstanceRecord { class_name, properties })
}

/// Read an object's class name from its system metadata.
pub(crate) fn read_class_name<H: ObjectHandle>(handle: &H) -> Result<Box<str>> {
	match handle.get_property(CLASS_NAME_PROPERTY)? {
		RawValue::Scalar(Scalar::Str(name)) => Ok(name),
		_ => Err(CimError::PropertyRead {
			property: CLASS_NAME_PROPERTY.to_owned(),
			detail: "class name is not a text scalar".to_owned(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use crate::cim::{
		Fault, MemoryClass, MemoryInstance, MemoryNamespace, MemoryObject, MemoryService, NamePattern, ObjectEnumerator, PatternKind,
		QueryService, RawValue, Scalar, Session, collect_instance,
	};

	fn single_instance_service() -> MemoryService {
		MemoryService::new(
			MemoryNamespace::new("root/cimv2").with_class(
				MemoryClass::new("Win32_Processor").with_instance(
					MemoryInstance::default()
						.with("DeviceID", RawValue::Scalar(Scalar::Str(Box::from("CPU0"))))
						.with("LoadPercentage", RawValue::Scalar(Scalar::U64(3)))
						.with("Stepping", RawValue::Null)
						.with("LoadHistory", RawValue::Array(vec![Scalar::U64(1), Scalar::U64(2)])),
				),
			),
		)
	}

	fn first_instance(service: &MemoryService) -> MemoryObject {
		let session = service.connect("root/cimv2").expect("connect succeeds");
		let mut enumerator = session.enumerate_instances("Win32_Processor").expect("instance enum opens");
		let mut page = enumerator.next_page().expect("first page reads");
		page.remove(0)
	}

	#[test]
	fn collects_matching_properties_in_discovery_order() {
		let service = single_instance_service();
		let mut instance = first_instance(&service);
		let filter = NamePattern::compile(PatternKind::Property, ".*Load.*").expect("filter compiles");

		let record = collect_instance(&mut instance, &filter).expect("collection succeeds");
		assert_eq!(record.class_name.as_ref(), "Win32_Processor");
		let pairs: Vec<(&str, &str)> = record.properties.iter().map(|item| (item.name.as_ref(), item.value.as_ref())).collect();
		assert_eq!(pairs, vec![("LoadPercentage", "3"), ("LoadHistory", "1, 2")]);
	}

	#[test]
	fn non_matching_filter_yields_empty_record() {
		let service = single_instance_service();
		let mut instance = first_instance(&service);
		let filter = NamePattern::compile(PatternKind::Property, "Nothing").expect("filter compiles");

		let record = collect_instance(&mut instance, &filter).expect("collection succeeds");
		assert_eq!(record.class_name.as_ref(), "Win32_Processor");
		assert!(record.properties.is_empty());
	}

	#[test]
	fn null_values_render_as_empty_text() {
		let service = single_instance_service();
		let mut instance = first_instance(&service);
		let filter = NamePattern::compile(PatternKind::Property, "Stepping").expect("filter compiles");

		let record = collect_instance(&mut instance, &filter).expect("collection succeeds");
		assert_eq!(record.properties.len(), 1);
		assert_eq!(record.properties[0].value.as_ref(), "");
	}

	#[test]
	fn injected_page_fault_surfaces_as_error() {
		let namespace = MemoryNamespace::new("root/cimv2")
			.with_class(MemoryClass::new("Win32_Processor").with_instance(MemoryInstance::default()));
		let service = MemoryService::with_fault(
			namespace,
			Fault::InstancePage {
				class: Box::from("Win32_Processor"),
				page: 0,
			},
		);
		let session = service.connect("root/cimv2").expect("connect succeeds");
		let mut enumerator = session.enumerate_instances("Win32_Processor").expect("instance enum opens");
		enumerator.next_page().expect_err("injected fault should fail the read");
	}
}
