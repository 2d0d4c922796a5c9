//! 测试用的合成日志片段

/// ORCA 单点 DFT 计算
pub const ORCA_SINGLE_POINT: &str = "\
                                 *****************
                                 * O   R   C   A *
                                 *****************

================================================================================
                                       INPUT FILE
================================================================================
NAME = water.inp
|  1> ! B3LYP def2-SVP
|  2>
|  3> * xyz 0 1
|  4>   O   0.000000   0.000000   0.117300
|  5>   H   0.000000   0.757200  -0.469200
|  6>   H   0.000000  -0.757200  -0.469200
|  7> *
|  8>
|  9>                          ****END OF INPUT****
================================================================================

-----------------------------------------
Your calculation utilizes the basis: def2-SVP
-----------------------------------------

 Multiplicity           Mult            ....    1
 Density Functional     Method          .... DFT(GTOs)
 Exchange Functional    Exchange        .... B88

Total Energy       :          -76.32602135 Eh           -2076.92310 eV

----------------
ORBITAL ENERGIES
----------------

  NO   OCC          E(Eh)            E(eV)
   0   2.0000     -18.932553      -515.1811
   1   2.0000      -0.919064       -25.0090
   2   2.0000      -0.474306       -12.9065
   3   2.0000      -0.328226        -8.9315
   4   2.0000      -0.253047        -6.8858
   5   0.0000       0.030463         0.8289
   6   0.0000       0.110997         3.0204

                    ********************************
                    * MULLIKEN POPULATION ANALYSIS *
                    ********************************

-------------------------   --------------------
FINAL SINGLE POINT ENERGY       -76.326021354891
-------------------------   --------------------

                             ****ORCA TERMINATED NORMALLY****
";

/// ORCA 几何优化，两次坐标输出，第二次为收敛结构
pub const ORCA_OPTIMISATION: &str = "\
                                 * O   R   C   A *
|  1> ! HF STO-3G Opt
|  2> * xyz 0 1
 Multiplicity           Mult            ....    1
 Ab initio Hamiltonian  Method          .... Hartree-Fock(GTOs)
Your calculation utilizes the basis: STO-3G

---------------------------------
CARTESIAN COORDINATES (ANGSTROEM)
---------------------------------
  O      0.000000    0.000000    0.200000
  H      0.000000    0.800000   -0.400000
  H      0.000000   -0.800000   -0.400000

Total Energy       :          -74.90000000 Eh           -2038.13210 eV
FINAL SINGLE POINT ENERGY       -74.900000000

                    ***********************HURRAY********************
                    ***        THE OPTIMIZATION HAS CONVERGED     ***
                    *************************************************

---------------------------------
CARTESIAN COORDINATES (ANGSTROEM)
---------------------------------
  O      0.000000    0.000000    0.117300
  H      0.000000    0.757200   -0.469200
  H      0.000000   -0.757200   -0.469200

Total Energy       :          -74.96590119 Eh           -2039.92583 eV
FINAL SINGLE POINT ENERGY       -74.965901192
                             ****ORCA TERMINATED NORMALLY****
";

/// ORCA 频率计算，含一个虚频
pub const ORCA_FREQUENCIES: &str = "\
                                 * O   R   C   A *
|  1> ! HF STO-3G Freq
 Multiplicity           Mult            ....    1
-----------------------
VIBRATIONAL FREQUENCIES
-----------------------

Scaling factor for frequencies =  1.000000000  (already applied!)

   0:         0.00 cm**-1
   1:         0.00 cm**-1
   2:         0.00 cm**-1
   3:         0.00 cm**-1
   4:         0.00 cm**-1
   5:         0.00 cm**-1
   6:       -45.12 cm**-1 ***imaginary mode***
   7:      1648.71 cm**-1
   8:      3801.22 cm**-1


------------
NORMAL MODES
------------
FINAL SINGLE POINT ENERGY       -74.965901192
                             ****ORCA TERMINATED NORMALLY****
";

/// Psi4 DF-MP2 单点
pub const PSI4_MP2: &str = "\
    Psi4: An Open-Source Ab Initio Electronic Structure Package
  ==> Input File <==

--------------------------------------------------------------------------
molecule {
0 1
O
H 1 0.96
H 1 0.96 2 104.5
}
set basis cc-pvdz
energy('mp2')
--------------------------------------------------------------------------
    Multiplicity = 1
  Basis Set: CC-PVDZ
  @DF-RHF Final Energy:   -76.0266327341

  => Energetics <=

    Total Energy =                    -76.0266327341

\t-----------------------------------------------------------
\t ==================> DF-MP2 Energies <====================
\t-----------------------------------------------------------
\t Reference Energy          =     -76.0266327341 [Eh]
\t Singles Energy            =      -0.0000000000 [Eh]
\t Same-Spin Energy          =      -0.0502386411 [Eh]
\t Opposite-Spin Energy      =      -0.1542308400 [Eh]
\t Correlation Energy        =      -0.2044694811 [Eh]
\t Total Energy              =     -76.2311022152 [Eh]
\t-----------------------------------------------------------
\t SCS Total Energy          =     -76.2284559558 [Eh]

*** Psi4 exiting successfully. Buy a developer a beer!
";

/// GAMESS RHF/MP2 单点，带自旋分量和 SRS-MP2
pub const GAMESS_MP2: &str = "\
          ******************************************************
          *         GAMESS VERSION = 30 SEP 2019 (R2)          *
          ******************************************************

 ECHO OF THE FIRST FEW INPUT CARDS -
 INPUT CARD> $CONTRL SCFTYP=RHF MPLEVL=2 RUNTYP=ENERGY ISPHER=1 $END
 INPUT CARD> $SYSTEM MWORDS=500 $END
 INPUT CARD> $BASIS GBASIS=CCD $END
 INPUT CARD> $DATA
 INPUT CARD>water
 INPUT CARD>C1
 INPUT CARD>O 8.0 0.0000 0.0000 0.1173
 INPUT CARD>H 1.0 0.0000 0.7572 -0.4692
 INPUT CARD>H 1.0 0.0000 -0.7572 -0.4692
 INPUT CARD> $END

     $CONTRL OPTIONS
     ---------------
 SCFTYP=RHF          RUNTYP=ENERGY       EXETYP=RUN
 MPLEVL=       2     CITYP =NONE         CCTYP =NONE
 DFTTYP=NONE         TDDFT =NONE

 TOTAL NUMBER OF ATOMS                        =    3
 CHARGE OF MOLECULE                           =    0
 SPIN MULTIPLICITY                            =    1

          -------------------
          RHF SCF CALCULATION
          -------------------

 FINAL RHF ENERGY IS      -76.0107465159 AFTER  12 ITERATIONS

          ----------------------------
          RESULTS OF MP2 CALCULATION
          ----------------------------

          E(0)=       -76.0107465159
          E(1)=         0.0
          E(2)=        -0.1983843264
          E(MP2)=     -76.2091308423

 SAME SPIN         =   -0.0510534864
 OPPOSITE SPIN     =   -0.1473308400
          E(SRS-MP2) =  -76.2523691135

 EXECUTION OF GAMESS TERMINATED NORMALLY Mon Oct 19 12:00:00 2026
";

/// GAMESS RHF 几何优化，$CONTRL 跨两张输入卡
pub const GAMESS_OPTIMISATION: &str = "\
          *         GAMESS VERSION = 30 SEP 2019 (R2)          *
 INPUT CARD> $CONTRL SCFTYP=RHF ISPHER=1
 INPUT CARD>   RUNTYP=OPTIMIZE $END
 INPUT CARD> $BASIS GBASIS=N31 NGAUSS=6 $END
 SPIN MULTIPLICITY                            =    1

 COORDINATES OF ALL ATOMS ARE (ANGS)
   ATOM   CHARGE       X              Y              Z
 ------------------------------------------------------------
 O           8.0   0.0000000000   0.0000000000   0.2000000000
 H           1.0   0.0000000000   0.8000000000  -0.4000000000
 H           1.0   0.0000000000  -0.8000000000  -0.4000000000

 FINAL RHF ENERGY IS      -75.9854321000 AFTER  11 ITERATIONS
                       TOTAL ENERGY =      -75.9854321000

          ***** EQUILIBRIUM GEOMETRY LOCATED *****
 COORDINATES OF ALL ATOMS ARE (ANGS)
   ATOM   CHARGE       X              Y              Z
 ------------------------------------------------------------
 O           8.0   0.0000000000   0.0000000000   0.1173000000
 H           1.0   0.0000000000   0.7572000000  -0.4692000000
 H           1.0   0.0000000000  -0.7572000000  -0.4692000000

 FINAL RHF ENERGY IS      -75.9860123456 AFTER   6 ITERATIONS
                       TOTAL ENERGY =      -75.9860123456

 EXECUTION OF GAMESS TERMINATED NORMALLY Mon Oct 19 12:00:00 2026
";

/// Psi4 B3LYP 优化后接频率，两次驱动调用
pub const PSI4_DFT_OPT_FREQ: &str = "\
    Psi4: An Open-Source Ab Initio Electronic Structure Package
  ==> Input File <==

--------------------------------------------------------------------------
molecule {
0 1
O
H 1 0.96
H 1 0.96 2 104.5
}
set basis cc-pvdz
optimize('b3lyp')
frequency('b3lyp')
--------------------------------------------------------------------------
    Multiplicity = 1
  Basis Set: CC-PVDZ
   => Composite Functional: B3LYP <=

  @DF-RKS Final Energy:   -76.4197815473
    Total Energy =                    -76.4197815473

       Center              X                  Y                   Z               Mass
    ------------   -----------------  -----------------  -----------------  -----------------
         O            0.000000000000     0.000000000000    -0.068516219320    15.994914619570
         H            0.000000000000    -0.790689573744     0.543701060715     1.007825032230
         H            0.000000000000     0.790689573744     0.543701060715     1.007825032230

  @DF-RKS Final Energy:   -76.4203245111
    Total Energy =                    -76.4203245111

\t**** Optimization is complete! (in 4 steps) ****

       Center              X                  Y                   Z               Mass
    ------------   -----------------  -----------------  -----------------  -----------------
         O            0.000000000000     0.000000000000    -0.065123400000    15.994914619570
         H            0.000000000000    -0.761234500000     0.516789000000     1.007825032230
         H            0.000000000000     0.761234500000     0.516789000000     1.007825032230

  @DF-RKS Final Energy:   -76.4203245112
    Total Energy =                    -76.4203245112

*** Psi4 exiting successfully. Buy a developer a beer!
";

/// 仅含多重度和轨道能量表的 ORCA 片段，能量单位 eV
pub fn orbital_log(multiplicity: u32, occupied: &[f64], virtuals: &[f64]) -> String {
    let occupation = if multiplicity == 2 { 1.0 } else { 2.0 };
    let mut out = format!(
        "|  1> ! B3LYP def2-SVP\n Multiplicity           Mult            ....    {}\n\n\
         ----------------\nORBITAL ENERGIES\n----------------\n\n  NO   OCC          E(Eh)            E(eV) \n",
        multiplicity
    );

    let rows = occupied
        .iter()
        .map(|e| (occupation, *e))
        .chain(virtuals.iter().map(|e| (0.0, *e)));
    for (i, (occ, ev)) in rows.enumerate() {
        out.push_str(&format!(
            "{:>4}   {:.4}   {:>12.6}   {:>12.4} \n",
            i,
            occ,
            ev / 27.211386,
            ev
        ));
    }

    out.push_str(
        "\n                    ********************************\n\
         \x20                   * MULLIKEN POPULATION ANALYSIS *\n",
    );
    out
}
