/// Error codes with category prefix
///
/// Categories:
/// - VAL: Step input validation errors
/// - REC: Metadata record (pkginfo) read/write
/// - TOOL: External content-addressing tool
/// - IO: File system operations
/// - CFG: Configuration parsing/validation
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (VAL001-VAL099)
    /// Missing or malformed input variable
    Val001,

    // Record errors (REC001-REC099)
    /// Record could not be loaded
    Rec001,
    /// Record could not be written
    Rec002,

    // Tool errors (TOOL001-TOOL099)
    /// Tool could not be started
    Tool001,
    /// Tool exited with a failure status
    Tool002,
    /// Tool output had an unexpected shape
    Tool003,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "TOOL002")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Rec001 => "REC001",
            ErrorCode::Rec002 => "REC002",
            ErrorCode::Tool001 => "TOOL001",
            ErrorCode::Tool002 => "TOOL002",
            ErrorCode::Tool003 => "TOOL003",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "A required input variable is missing or has the wrong type",
            ErrorCode::Rec001 => "The pkginfo file does not exist or is not a valid dictionary",
            ErrorCode::Rec002 => "The updated pkginfo could not be written back to disk",
            ErrorCode::Tool001 => "The content-addressing tool could not be started",
            ErrorCode::Tool002 => "The content-addressing tool reported a failure",
            ErrorCode::Tool003 => "The content-addressing tool printed output in an unexpected format",
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "1. Provide both pkginfo_path and artifact_path\n2. Pass them as strings in the env file\n3. Use 'cidstamp info' to list the expected variables",
            ErrorCode::Rec001 => "1. Verify the pkginfo path is correct\n2. Check that the file is a plist or JSON dictionary\n3. Regenerate the pkginfo if it is corrupted",
            ErrorCode::Rec002 => "1. Check write permissions on the pkginfo directory\n2. Ensure the disk is not full\n3. Retry the step",
            ErrorCode::Tool001 => "1. Verify the ipfs binary is installed\n2. Point --tool or CIDSTAMP_TOOL at the right executable\n3. Check that the file is executable",
            ErrorCode::Tool002 => "1. Read the tool output above\n2. Verify the artifact path exists\n3. Run the tool manually to reproduce",
            ErrorCode::Tool003 => "1. Check the installed ipfs version\n2. Make sure no wrapper script adds extra output\n3. Run the tool manually to inspect its output",
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted\n3. Ensure the path exists",
            ErrorCode::Io002 => "1. Check file/directory permissions\n2. Run with appropriate privileges\n3. Verify ownership of the resource",
            ErrorCode::Cfg001 => "1. Check the configuration file syntax\n2. Remove unknown keys\n3. Compare with the documented defaults",
            ErrorCode::Int001 => "1. Try the operation again\n2. Check for updates to cidstamp\n3. Report the issue with debug logs",
        }
    }
}
