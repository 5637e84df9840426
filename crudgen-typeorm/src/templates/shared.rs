//! Shared artifacts generated once per project.

/// The shared error type thrown by generated services.
///
/// Generated only when absent so hand edits survive later runs.
pub const APP_ERROR: &str = r#"export default class AppError {
    public readonly message: string;

    public readonly statusCode: number;

    constructor(message: string, statusCode = 400) {
        this.message = message;
        this.statusCode = statusCode;
    }
}
"#;
