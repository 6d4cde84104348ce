mod string;

pub use string::java_string_contents;
