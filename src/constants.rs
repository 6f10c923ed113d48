use tinyvec::ArrayVec;

pub const D_PBLC: [u8; 2] = [0x80, 0x80];
pub const D_MESG: [u8; 2] = [0x81, 0x81];
pub const D_PRIV: u8 = 0xff;

pub const MAX_HASH_SIZE: usize = 32;
pub const ENCODED_MESSAGE_HASH_MAX_LEN: usize = MAX_HASH_SIZE + 2;

pub const MIN_WINTERNITZ_PARAMETER: u8 = 1;
pub const WINTERNITZ_PARAMETERS: [u8; 4] = [1, 2, 4, 8];

pub const MAX_NUM_WINTERNITZ_CHAINS: usize =
    num_winternitz_chains(MIN_WINTERNITZ_PARAMETER, MAX_HASH_SIZE);

// x_0 || ... || x_{p-1} and Y_0 || ... || Y_{p-1} share this bound
pub const MAX_LMOTS_CHAIN_DATA_LENGTH: usize = MAX_HASH_SIZE * MAX_NUM_WINTERNITZ_CHAINS;
pub const MAX_LMOTS_PRIVATE_KEY_LENGTH: usize = MAX_LMOTS_CHAIN_DATA_LENGTH;
pub const MAX_LMOTS_SIGNATURE_LENGTH: usize =
    lmots_signature_length(MAX_HASH_SIZE, MAX_NUM_WINTERNITZ_CHAINS);

pub type Node = ArrayVec<[u8; MAX_HASH_SIZE]>;
pub type HashChains = ArrayVec<[Node; MAX_NUM_WINTERNITZ_CHAINS]>;

const fn div_ceil(numerator: usize, denominator: usize) -> usize {
    (numerator + denominator - 1) / denominator
}

const fn floor_log2(x: usize) -> usize {
    (usize::BITS - 1 - x.leading_zeros()) as usize
}

// RFC 8554: "u"; number of w-bit digits of the message hash
pub const fn num_message_chains(winternitz_parameter: u8, output_size: usize) -> usize {
    div_ceil(8 * output_size, winternitz_parameter as usize)
}

// RFC 8554: "v"; number of w-bit digits of the checksum
pub const fn num_checksum_chains(winternitz_parameter: u8, output_size: usize) -> usize {
    let w = winternitz_parameter as usize;
    let max_checksum = ((1 << w) - 1) * num_message_chains(winternitz_parameter, output_size);
    div_ceil(floor_log2(max_checksum) + 1, w)
}

// RFC 8554: "p"; see terminology: "single Winternitz chain", "number of independent Winternitz chains"
pub const fn num_winternitz_chains(winternitz_parameter: u8, output_size: usize) -> usize {
    num_message_chains(winternitz_parameter, output_size)
        + num_checksum_chains(winternitz_parameter, output_size)
}

pub const fn lmots_signature_length(hash_size: usize, num_winternitz_chains: usize) -> usize {
    hash_size                                   // Signature Randomizer
        + (hash_size * num_winternitz_chains) // Signature Data
}
