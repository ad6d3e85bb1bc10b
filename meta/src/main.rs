fn main() {
    multiversx_sc_meta_lib::cli_main::<mayor_election::AbiProvider>();
}
