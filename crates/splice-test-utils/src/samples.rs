//! Sample Go sources and the outputs docsplice is expected to produce.
//!
//! Expected outputs are unformatted (no external formatter applied).

/// Declaration prefix for [`OPTIONS_SOURCE`].
pub const OPTIONS_PREFIX: &str = "optCode";

/// Target marker pattern for [`OPTIONS_SOURCE`].
pub const OPTIONS_TARGET: &str = "^// Valid option codes:";

/// Separator pattern for [`OPTIONS_SOURCE`].
pub const OPTIONS_SEPARATOR: &str = "^//$";

/// A source whose doc listing is stale.
pub const OPTIONS_SOURCE: &str = r#"package stackvm

// New creates a new machine from a varcoded program.
//
// Valid option codes:
// - 0x00 stale: this listing is out of date and
//   will be regenerated.
//
// The rest of prog is loaded in memory immediately after the stack space.
func New(prog []byte) (*Mach, error) {
	return nil, nil
}

const (
	// indicates the end of options (beginning of program); must not have a
	// parameter.
	optCodeEnd uint8 = 0x00

	// its required parameter declares the amount of memory given to the
	// parameter and control stacks (see below for details). The size must be a
	// multiple of 4 (32-bit word size). Default: 0x40.
	optCodeStackSize = 0x01

	// its required parameter specifies a maximum limit on how many machine
	// copies may be queued. Once this limit is reached operations like fork
	// and branch fail with queue-full error. Default: 10.
	optCodeQueueSize = 0x02

	// its optional parameter declares a limit on the number of program
	// operations that can be executed by a single machine (the runtime
	// operation count is not shared between machine copies).
	optCodeMaxOps = 0x03

	optCodeUndocumented = 0x06

	// reserved for future use, where its parameter will be the required
	// machine/program version; passing a version value is currently
	// unsupported.
	optCodeVersion = 0x7f
)
"#;

/// [`OPTIONS_SOURCE`] after regenerating its doc listing.
pub const OPTIONS_EXPECTED: &str = r#"package stackvm

// New creates a new machine from a varcoded program.
//
// Valid option codes:
// - 0x00 end: indicates the end of options (beginning of program); must not
//   have a parameter.
// - 0x01 stack size: its required parameter declares the amount of memory
//   given to the parameter and control stacks (see below for details). The
//   size must be a multiple of 4 (32-bit word size). Default: 0x40.
// - 0x02 queue size: its required parameter specifies a maximum limit on how
//   many machine copies may be queued. Once this limit is reached operations
//   like fork and branch fail with queue-full error. Default: 10.
// - 0x03 max ops: its optional parameter declares a limit on the number of
//   program operations that can be executed by a single machine (the runtime
//   operation count is not shared between machine copies).
// - 0x06 undocumented: 
// - 0x7f version: reserved for future use, where its parameter will be the
//   required machine/program version; passing a version value is currently
//   unsupported.
//
// The rest of prog is loaded in memory immediately after the stack space.
func New(prog []byte) (*Mach, error) {
	return nil, nil
}

const (
	// indicates the end of options (beginning of program); must not have a
	// parameter.
	optCodeEnd uint8 = 0x00

	// its required parameter declares the amount of memory given to the
	// parameter and control stacks (see below for details). The size must be a
	// multiple of 4 (32-bit word size). Default: 0x40.
	optCodeStackSize = 0x01

	// its required parameter specifies a maximum limit on how many machine
	// copies may be queued. Once this limit is reached operations like fork
	// and branch fail with queue-full error. Default: 10.
	optCodeQueueSize = 0x02

	// its optional parameter declares a limit on the number of program
	// operations that can be executed by a single machine (the runtime
	// operation count is not shared between machine copies).
	optCodeMaxOps = 0x03

	optCodeUndocumented = 0x06

	// reserved for future use, where its parameter will be the required
	// machine/program version; passing a version value is currently
	// unsupported.
	optCodeVersion = 0x7f
)
"#;

/// An op table for the constant-table generator.
pub const OPS_SOURCE: &str = r#"package stackvm

var ops = [128]opDef{
	// 0x00
	justop("crash"),
	valop("push"), valop("pop"),
	valop("dup"), valop("swap"),
	noop, noop, noop,
	// 0x08
	addrop("fetch"), valop("store"), addrop("storeTo"),
	noop, noop, noop, noop, noop,
	// 0x10
	valop("cpush"), valop("cpop"), valop("p2c"), valop("c2p"),
}

func init() {
}
"#;

/// Constants generated from [`OPS_SOURCE`] with package `stackvm`.
pub const OPS_EXPECTED: &str = "package stackvm

const (
opCodeCrash = opCode(0x00)
opCodePush = opCode(0x01)
opCodePop = opCode(0x02)
opCodeDup = opCode(0x03)
opCodeSwap = opCode(0x04)
opCodeFetch = opCode(0x08)
opCodeStore = opCode(0x09)
opCodeStoreto = opCode(0x0a)
opCodeCpush = opCode(0x10)
opCodeCpop = opCode(0x11)
opCodeP2C = opCode(0x12)
opCodeC2P = opCode(0x13)
)
";
