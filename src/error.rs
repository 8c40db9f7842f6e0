error_chain! {
    links {
        ParSer(hexdec_par_ser::Error, hexdec_par_ser::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        DigitOutOfRange(value: u8) {
            description("a hexadecimal digit value was bigger than 15")
            display("the digit value {} is not a hexadecimal digit (0-15)", value)
        }
        ReadInput(path: ::std::path::PathBuf) {
            description("the input could not be read")
            display("the input file {} could not be read", path.display())
        }
    }
}
