pub trait ResultExt<T, E> {
	/// Converts to an `Option`, logging the error together with what we were trying to do.
	fn ok_or_log(self, action: &'static str) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, action: &'static str) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self
			.inspect_err(|err| tracing::warn!(error = %err, "failed to {action}"))
			.ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ok_or_log() {
		assert_eq!(Ok::<_, String>(3).ok_or_log("count"), Some(3));
		assert_eq!(Err::<i32, _>("nope".to_owned()).ok_or_log("count"), None);
	}
}
