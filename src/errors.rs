// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at everything `error_chain!` creates.

error_chain! {

    errors {
        InvalidArgument(reason: String) {
            description("invalid argument")
            display("invalid argument: {}", reason)
        }
        RandomSource(reason: String) {
            description("random source failure")
            display("random source failure: {}", reason)
        }
    }

    foreign_links {
        Io(::std::io::Error);
    }
}
