use crate::cim::collect::{collect_instance, read_class_name};
use crate::cim::{InstanceRecord, NamePattern, ObjectEnumerator, Result, Session};

/// Walk every class page, then every instance page of each matching
/// class, flattening matching instances in enumerator order.
///
/// Ordering follows the source exactly: instance order within a page,
/// page order within a class, class order across class pages. No
/// sorting is applied. The first failed foreign call aborts the whole
/// traversal; the walker never resumes past an error.
pub fn walk_instances<S: Session>(session: &S, class_filter: &NamePattern, property_filter: &NamePattern) -> Result<Vec<InstanceRecord>> {
	let mut output = Vec::new();

	let mut classes = session.enumerate_classes()?;
	loop {
		let page = classes.next_page()?;
		if page.is_empty() {
			break;
		}
		for class_object in page {
			let class_name = read_class_name(&class_object)?;
			if !class_filter.matches(&class_name) {
				continue;
			}
			collect_class_instances(session, &class_name, property_filter, &mut output)?;
		}
	}

	Ok(output)
}

fn collect_class_instances<S: Session>(session: &S, class_name: &str, property_filter: &NamePattern, output: &mut Vec<InstanceRecord>) -> Result<()> {
	let mut instances = session.enumerate_instances(class_name)?;
	loop {
		let page = instances.next_page()?;
		if page.is_empty() {
			return Ok(());
		}
		for mut instance in page {
			output.push(collect_instance(&mut instance, property_filter)?);
		}
	}
}
