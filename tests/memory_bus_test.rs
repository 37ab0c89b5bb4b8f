//! MemoryBus and FlatMemory tests.

use cpu6502::{regions, FlatMemory, MemoryBus, MemoryRegion};

#[test]
fn test_flat_memory_starts_zeroed() {
    let memory = FlatMemory::new();
    assert!(memory.as_slice().iter().all(|&b| b == 0));
    assert_eq!(memory.as_slice().len(), 0x10000);
}

#[test]
fn test_read_write_every_page_boundary() {
    let mut memory = FlatMemory::new();
    for page in 0..=0xFFu16 {
        let lo = page << 8;
        let hi = lo | 0xFF;
        memory.write(lo, page as u8);
        memory.write(hi, !(page as u8));
        assert_eq!(memory.read(lo), page as u8);
        assert_eq!(memory.read(hi), !(page as u8));
    }
}

#[test]
fn test_word_access_is_little_endian_and_wraps() {
    let mut memory = FlatMemory::new();
    memory.write_u16(0x1000, 0xBEEF);
    assert_eq!(memory.read(0x1000), 0xEF);
    assert_eq!(memory.read(0x1001), 0xBE);
    assert_eq!(memory.read_u16(0x1000), 0xBEEF);

    memory.write_u16(0xFFFF, 0x1234);
    assert_eq!(memory.read(0xFFFF), 0x34);
    assert_eq!(memory.read(0x0000), 0x12);
}

#[test]
fn test_load_truncates_at_top() {
    let mut memory = FlatMemory::new();
    let loaded = memory.load(0xFFFE, &[1, 2, 3, 4]);
    assert_eq!(loaded, 2);
    assert_eq!(memory.read(0xFFFE), 1);
    assert_eq!(memory.read(0xFFFF), 2);
    assert_eq!(memory.read(0x0000), 0);
}

#[test]
fn test_page_view() {
    let mut memory = FlatMemory::new();
    memory.write(0x0280, 0x99);
    let page = memory.page(0x02);
    assert_eq!(page.len(), 256);
    assert_eq!(page[0x80], 0x99);
}

#[test]
fn test_clear() {
    let mut memory = FlatMemory::new();
    memory.write(0x1234, 0x56);
    memory.clear();
    assert_eq!(memory.read(0x1234), 0);
}

#[test]
fn test_flat_memory_never_raises_irq() {
    assert!(!FlatMemory::new().irq_active());
}

#[test]
fn test_region_classification() {
    assert_eq!(MemoryRegion::of(0x0000), MemoryRegion::ZeroPage);
    assert_eq!(MemoryRegion::of(0x01FF), MemoryRegion::Stack);
    assert_eq!(MemoryRegion::of(0x2003), MemoryRegion::PpuRegisters);
    assert_eq!(MemoryRegion::of(0x4015), MemoryRegion::ApuIoRegisters);
    assert_eq!(MemoryRegion::of(0xFFFC), MemoryRegion::Vectors);
    assert_eq!(MemoryRegion::of(0x8000), MemoryRegion::General);

    assert_eq!(regions::RESET_VECTOR, 0xFFFC);
    assert_eq!(regions::NMI_VECTOR, 0xFFFA);
    assert_eq!(regions::IRQ_VECTOR, 0xFFFE);
}
